//! `feedtune preview <url> --title ...` – run an item through the stored settings.

use anyhow::{Context, Result};
use feedtune_core::config::FeedtuneConfig;
use feedtune_core::content_filter::FilterStage;
use feedtune_core::{DomainCanonicalizer, ItemInput, PresentedItem, Presenter, SettingsDb};
use std::path::Path;

pub async fn run_preview(
    db: &SettingsDb,
    cfg: &FeedtuneConfig,
    url: &str,
    title: &str,
    feed_title: &str,
    content_file: Option<&Path>,
) -> Result<()> {
    let content = match content_file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read content file: {}", path.display()))?,
        None => String::new(),
    };

    let presenter = Presenter::new(
        DomainCanonicalizer::with_capacity(cfg.cache_capacity),
        cfg.base,
        cfg.base_hashtags.clone(),
    );
    let item = ItemInput {
        link: url.to_string(),
        title: title.to_string(),
        content,
        feed_title: feed_title.to_string(),
    };

    let domain = presenter.domain_of(url);
    let record = if domain.is_empty() {
        None
    } else {
        db.get_enabled(&domain).await?
    };

    let presented = presenter.present(&item, record.as_ref());
    print!("{}", render_preview(&presented));
    Ok(())
}

pub(crate) fn render_preview(p: &PresentedItem) -> String {
    let domain = if p.domain.is_empty() { "(unknown)" } else { p.domain.as_str() };
    let mut hashtags = p.hashtags.clone();
    // Merged hashtag order is unspecified; sort for stable display only.
    hashtags.sort();

    let s = &p.settings;
    let mut out = format!(
        "Domain: {domain} ({})\n\
         Settings: send_mode={} display_author={} display_via={} style={} display_media={}\n\
         Hashtags: {}\n\
         Title: {}\n\n{}\n",
        p.category.label(),
        s.send_mode,
        s.display_author,
        s.display_via,
        s.style,
        s.display_media,
        hashtags.join(" "),
        p.title,
        p.content,
    );

    for rule in &p.skipped_rules {
        let stage = match rule.stage {
            FilterStage::Remove => "remove",
            FilterStage::Replace => "replace",
        };
        out.push_str(&format!(
            "warning: skipped {stage} rule #{}: {:?}\n",
            rule.index, rule.reason
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedtune_core::content_filter::{SkipReason, SkippedRule};
    use feedtune_core::{DisplaySettings, DomainCategory};

    #[test]
    fn renders_sorted_hashtags_and_warnings() {
        let p = PresentedItem {
            domain: "dailynews.example.com".to_string(),
            category: DomainCategory::NewsSite,
            settings: DisplaySettings {
                display_via: 1,
                ..DisplaySettings::default()
            },
            title: "Headline".to_string(),
            content: "Body".to_string(),
            hashtags: vec!["#RSS".to_string(), "#News".to_string()],
            skipped_rules: vec![SkippedRule {
                stage: FilterStage::Remove,
                index: 2,
                reason: SkipReason::MissingField("pattern"),
            }],
        };
        let out = render_preview(&p);
        assert!(out.starts_with("Domain: dailynews.example.com (news site)\n"));
        assert!(out.contains("display_via=1"));
        assert!(out.contains("Hashtags: #News #RSS\n"));
        assert!(out.contains("Title: Headline\n\nBody\n"));
        assert!(out.contains("warning: skipped remove rule #2"));
    }

    #[test]
    fn unknown_domain_is_labelled() {
        let p = PresentedItem {
            domain: String::new(),
            category: DomainCategory::General,
            settings: DisplaySettings::default(),
            title: "T".to_string(),
            content: String::new(),
            hashtags: vec![],
            skipped_rules: vec![],
        };
        assert!(render_preview(&p).starts_with("Domain: (unknown) (general site)\n"));
    }
}
