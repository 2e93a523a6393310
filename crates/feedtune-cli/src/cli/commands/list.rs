//! `feedtune list` – show enabled domain settings.

use anyhow::Result;
use feedtune_core::{DomainSettingsRecord, SettingsDb};

pub async fn run_list(db: &SettingsDb) -> Result<()> {
    let records = db.list_enabled().await?;
    print!("{}", render_list(&records));
    Ok(())
}

pub(crate) fn render_list(records: &[DomainSettingsRecord]) -> String {
    if records.is_empty() {
        return "No domain settings configured.\n".to_string();
    }

    let mut out = String::from("Configured domains:\n\n");
    for r in records {
        out.push_str(&format!("{}\n", r.domain));
        if let Some(template) = r.custom_title_template.as_deref().filter(|t| !t.is_empty()) {
            out.push_str(&format!("  title: {template}\n"));
        }
        if let Some(tags) = r.hashtag_filter.as_ref().filter(|t| !t.is_empty()) {
            out.push_str(&format!("  hashtags: {}\n", tags.join(", ")));
        }
        if r.send_mode != 0 {
            out.push_str(&format!("  send mode: {}\n", r.send_mode));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list() {
        assert_eq!(render_list(&[]), "No domain settings configured.\n");
    }

    #[test]
    fn only_set_fields_are_shown() {
        let mut a = DomainSettingsRecord::new("a.example.com");
        a.custom_title_template = Some("{title}!".to_string());
        a.hashtag_filter = Some(vec!["#A".to_string(), "#B".to_string()]);
        a.send_mode = 2;
        let b = DomainSettingsRecord::new("b.example.com");

        let out = render_list(&[a, b]);
        assert!(out.contains("a.example.com\n  title: {title}!\n  hashtags: #A, #B\n  send mode: 2\n"));
        assert!(out.contains("b.example.com\n\n"));
    }
}
