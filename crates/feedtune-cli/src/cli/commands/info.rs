//! `feedtune info <url>` – describe a domain and its settings.

use anyhow::Result;
use feedtune_core::settings::MediaHandling;
use feedtune_core::{classify, default_profile, DomainCategory, DomainSettingsRecord, SettingsDb};

use super::canonical_domain;

pub async fn run_info(db: &SettingsDb, url: &str) -> Result<()> {
    let domain = canonical_domain(url)?;
    let record = db.get_enabled(&domain).await?;
    print!("{}", render_info(&domain, classify(&domain), record.as_ref()));
    Ok(())
}

pub(crate) fn render_info(
    domain: &str,
    category: DomainCategory,
    record: Option<&DomainSettingsRecord>,
) -> String {
    let mut out = format!("Domain: {domain}\nType: {}\n\n", category.label());

    match record {
        Some(r) => {
            out.push_str("Custom settings:\n");
            if let Some(t) = r.custom_title_template.as_deref().filter(|t| !t.is_empty()) {
                out.push_str(&format!("  title template: {t}\n"));
            }
            if let Some(tags) = r.hashtag_filter.as_ref().filter(|t| !t.is_empty()) {
                out.push_str(&format!("  hashtags: {}\n", tags.join(", ")));
            }
            for (label, value) in [
                ("send mode", r.send_mode),
                ("author display", r.display_author),
                ("via display", r.display_via),
                ("style", r.style),
            ] {
                if value != 0 {
                    out.push_str(&format!("  {label}: {value}\n"));
                }
            }
            if r.media_handling != MediaHandling::Auto {
                out.push_str(&format!("  media: {}\n", r.media_handling.as_str()));
            }
            if let Some(filter) = r.content_filter.as_ref().filter(|f| !f.is_empty()) {
                out.push_str(&format!(
                    "  content filter: {} removal(s), {} replacement(s)\n",
                    filter.remove_patterns.len(),
                    filter.replace_patterns.len()
                ));
            }
        }
        None => out.push_str("No custom settings for this domain.\n"),
    }

    let suggested = default_profile(category).hashtags;
    if !suggested.is_empty() {
        out.push_str(&format!("\nSuggested hashtags: {}\n", suggested.join(" ")));
    }
    out
}
