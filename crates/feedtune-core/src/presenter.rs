//! End-to-end preparation of a single feed item.
//!
//! The presenter ties the pure pieces together in a fixed order:
//! canonicalize → classify → resolve settings → filter content → render
//! title → merge hashtags. The caller fetches the domain record beforehand,
//! typically with `SettingsDb::get_enabled`.

use crate::classify::{classify, default_profile, DomainCategory};
use crate::content_filter::{self, SkippedRule};
use crate::domain::DomainCanonicalizer;
use crate::hashtags;
use crate::settings::{self, DisplaySettings, DomainSettingsRecord};
use crate::title;

/// Raw item fields as they come out of a feed.
#[derive(Debug, Clone, Default)]
pub struct ItemInput {
    /// Item or feed link used to determine the source domain.
    pub link: String,
    pub title: String,
    pub content: String,
    pub feed_title: String,
}

/// Item ready for the delivery layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedItem {
    /// Canonical domain; empty if the link had no usable host.
    pub domain: String,
    pub category: DomainCategory,
    pub settings: DisplaySettings,
    pub title: String,
    pub content: String,
    pub hashtags: Vec<String>,
    /// Content filter rules that could not be applied.
    pub skipped_rules: Vec<SkippedRule>,
}

/// Applies per-domain settings to items on top of fixed base settings.
#[derive(Debug, Clone)]
pub struct Presenter {
    canonicalizer: DomainCanonicalizer,
    base: DisplaySettings,
    base_hashtags: Vec<String>,
}

impl Presenter {
    pub fn new(
        canonicalizer: DomainCanonicalizer,
        base: DisplaySettings,
        base_hashtags: Vec<String>,
    ) -> Self {
        Self {
            canonicalizer,
            base,
            base_hashtags,
        }
    }

    pub fn base(&self) -> &DisplaySettings {
        &self.base
    }

    /// Canonical domain of `link`, via the shared cache.
    pub fn domain_of(&self, link: &str) -> String {
        self.canonicalizer.canonicalize(link)
    }

    /// Prepare `item` using `record` (if any) for its domain.
    ///
    /// A disabled record counts as no record. Without a record the domain's
    /// category profile supplies default settings and suggested hashtags.
    pub fn present(
        &self,
        item: &ItemInput,
        record: Option<&DomainSettingsRecord>,
    ) -> PresentedItem {
        let domain = self.domain_of(&item.link);
        let category = classify(&domain);
        let record = record.filter(|r| r.enabled);

        let settings = settings::resolve(&self.base, record, &domain);

        let outcome = content_filter::apply_with_diagnostics(
            &item.content,
            record.and_then(|r| r.content_filter.as_ref()),
        );

        let title = title::render(
            &item.title,
            record.and_then(|r| r.custom_title_template.as_deref()),
            &item.feed_title,
        );

        let hashtags = match record {
            Some(r) => hashtags::merge(&self.base_hashtags, r.hashtag_filter.as_deref()),
            None => {
                let suggested = default_profile(category).hashtags;
                hashtags::merge(&self.base_hashtags, Some(suggested.as_slice()))
            }
        };

        tracing::debug!(
            domain = %domain,
            ?category,
            has_record = record.is_some(),
            skipped = outcome.skipped.len(),
            "presented item"
        );

        PresentedItem {
            domain,
            category,
            settings,
            title,
            content: outcome.content,
            hashtags,
            skipped_rules: outcome.skipped,
        }
    }
}
