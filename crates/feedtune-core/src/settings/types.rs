//! Settings value types shared by the resolver, the store, and the config file.

use serde::{Deserialize, Serialize};

use crate::content_filter::FilterSpec;

use super::sentinel::Setting;

/// How media attached to an item should be handled for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaHandling {
    /// Inherit the base `display_media`.
    #[default]
    Auto,
    Include,
    Exclude,
    OnlyMedia,
}

impl MediaHandling {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaHandling::Auto => "auto",
            MediaHandling::Include => "include",
            MediaHandling::Exclude => "exclude",
            MediaHandling::OnlyMedia => "only_media",
        }
    }

    /// Lenient decode of the persisted string; unknown values inherit.
    pub fn from_str(s: &str) -> Self {
        match s {
            "include" => MediaHandling::Include,
            "exclude" => MediaHandling::Exclude,
            "only_media" => MediaHandling::OnlyMedia,
            _ => MediaHandling::Auto,
        }
    }

    /// Integer `display_media` flag: `auto|include → 0`, `exclude → -1`, `only_media → 1`.
    pub fn display_media(self) -> i16 {
        match self {
            MediaHandling::Auto | MediaHandling::Include => 0,
            MediaHandling::Exclude => -1,
            MediaHandling::OnlyMedia => 1,
        }
    }

    /// `auto` inherits; every other value overrides `display_media`.
    pub fn as_setting(self) -> Setting<i16> {
        match self {
            MediaHandling::Auto => Setting::Inherit,
            other => Setting::Override(other.display_media()),
        }
    }
}

/// Display options consumed by the delivery layer.
///
/// Used both as the caller's base settings and as the resolved output of a
/// merge. Values follow the delivery layer's conventions; `0` is its
/// "auto" choice for every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub send_mode: i16,
    pub display_author: i16,
    pub display_via: i16,
    pub style: i16,
    /// `-1` hide media, `0` include, `1` media only.
    pub display_media: i16,
}

/// Per-domain overrides as persisted by the settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSettingsRecord {
    /// Canonical domain this record applies to.
    pub domain: String,
    #[serde(default)]
    pub custom_title_template: Option<String>,
    #[serde(default)]
    pub hashtag_filter: Option<Vec<String>>,
    #[serde(default)]
    pub content_filter: Option<FilterSpec>,
    #[serde(default)]
    pub media_handling: MediaHandling,
    #[serde(default)]
    pub send_mode: i16,
    #[serde(default)]
    pub display_author: i16,
    #[serde(default)]
    pub display_via: i16,
    #[serde(default)]
    pub style: i16,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl DomainSettingsRecord {
    /// Record for `domain` with every field at its inherit value.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            custom_title_template: None,
            hashtag_filter: None,
            content_filter: None,
            media_handling: MediaHandling::Auto,
            send_mode: 0,
            display_author: 0,
            display_via: 0,
            style: 0,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_handling_mapping() {
        assert_eq!(MediaHandling::Auto.display_media(), 0);
        assert_eq!(MediaHandling::Include.display_media(), 0);
        assert_eq!(MediaHandling::Exclude.display_media(), -1);
        assert_eq!(MediaHandling::OnlyMedia.display_media(), 1);
    }

    #[test]
    fn media_handling_string_roundtrip_and_unknown() {
        for m in [
            MediaHandling::Auto,
            MediaHandling::Include,
            MediaHandling::Exclude,
            MediaHandling::OnlyMedia,
        ] {
            assert_eq!(MediaHandling::from_str(m.as_str()), m);
        }
        assert_eq!(MediaHandling::from_str("sometimes"), MediaHandling::Auto);
    }

    #[test]
    fn include_is_an_override_even_though_it_maps_to_zero() {
        assert_eq!(MediaHandling::Include.as_setting(), Setting::Override(0));
        assert!(MediaHandling::Auto.as_setting().is_inherit());
    }

    #[test]
    fn record_json_defaults() {
        let rec: DomainSettingsRecord = serde_json::from_str(r#"{"domain":"example.com"}"#).unwrap();
        assert_eq!(rec, DomainSettingsRecord::new("example.com"));
        assert!(rec.enabled);
        assert_eq!(rec.media_handling.as_setting(), crate::settings::Setting::Inherit);
    }

    #[test]
    fn record_json_snake_case_fields() {
        let rec: DomainSettingsRecord = serde_json::from_str(
            r#"{"domain":"jobs.example.com","media_handling":"only_media","send_mode":2,"enabled":false}"#,
        )
        .unwrap();
        assert_eq!(rec.media_handling, MediaHandling::OnlyMedia);
        assert_eq!(rec.send_mode, 2);
        assert!(!rec.enabled);
    }
}
