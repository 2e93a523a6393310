//! `feedtune set <domain> [options]` – create or update settings for a domain.

use anyhow::Result;
use feedtune_core::content_filter::{FilterSpec, ReplaceRule};
use feedtune_core::{DomainSettingsRecord, SettingsDb};

use super::canonical_domain;
use crate::cli::SetArgs;

pub async fn run_set(db: &SettingsDb, args: SetArgs) -> Result<()> {
    let domain = canonical_domain(&args.domain)?;
    let existing = db.get(&domain).await?;
    let created = existing.is_none();
    let record = apply_args(existing.unwrap_or_else(|| DomainSettingsRecord::new(&domain)), args);
    db.upsert(&record).await?;
    if created {
        println!("Created settings for {domain}");
    } else {
        println!("Updated settings for {domain}");
    }
    Ok(())
}

/// Overlay the flags that were given onto `record`.
pub(crate) fn apply_args(mut record: DomainSettingsRecord, args: SetArgs) -> DomainSettingsRecord {
    if let Some(template) = args.title_template {
        record.custom_title_template = Some(template).filter(|t| !t.is_empty());
    }
    if !args.hashtags.is_empty() {
        record.hashtag_filter = Some(args.hashtags);
    }
    if let Some(media) = args.media {
        record.media_handling = media;
    }
    if let Some(v) = args.send_mode {
        record.send_mode = v;
    }
    if let Some(v) = args.display_author {
        record.display_author = v;
    }
    if let Some(v) = args.display_via {
        record.display_via = v;
    }
    if let Some(v) = args.style {
        record.style = v;
    }

    if !args.remove_patterns.is_empty() || !args.replace.is_empty() {
        let mut filter = record.content_filter.take().unwrap_or_default();
        if !args.remove_patterns.is_empty() {
            filter.remove_patterns = args.remove_patterns;
        }
        if !args.replace.is_empty() {
            filter.replace_patterns = args
                .replace
                .chunks_exact(2)
                .map(|pair| ReplaceRule::new(pair[0].as_str(), pair[1].as_str()))
                .collect();
        }
        record.content_filter = Some(filter).filter(|f: &FilterSpec| !f.is_empty());
    }

    if args.disable {
        record.enabled = false;
    } else if args.enable {
        record.enabled = true;
    }
    record
}
