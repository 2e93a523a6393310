//! Sentinel-precedence merge of base settings with a domain record.

use crate::classify::{classify, default_profile};

use super::sentinel::Setting;
use super::types::{DisplaySettings, DomainSettingsRecord};

/// Overrides carried by a record, lifted out of the sentinel encoding.
struct Overrides {
    send_mode: Setting<i16>,
    display_author: Setting<i16>,
    display_via: Setting<i16>,
    style: Setting<i16>,
    display_media: Setting<i16>,
}

impl Overrides {
    fn from_record(record: &DomainSettingsRecord) -> Self {
        Self {
            send_mode: Setting::from_sentinel(record.send_mode),
            display_author: Setting::from_sentinel(record.display_author),
            display_via: Setting::from_sentinel(record.display_via),
            style: Setting::from_sentinel(record.style),
            display_media: record.media_handling.as_setting(),
        }
    }

    /// Default profiles use `0` for "no opinion" on every field, media included.
    fn from_profile(profile: &DisplaySettings) -> Self {
        Self {
            send_mode: Setting::from_sentinel(profile.send_mode),
            display_author: Setting::from_sentinel(profile.display_author),
            display_via: Setting::from_sentinel(profile.display_via),
            style: Setting::from_sentinel(profile.style),
            display_media: Setting::from_sentinel(profile.display_media),
        }
    }

    fn apply(self, base: &DisplaySettings) -> DisplaySettings {
        DisplaySettings {
            send_mode: self.send_mode.apply(base.send_mode),
            display_author: self.display_author.apply(base.display_author),
            display_via: self.display_via.apply(base.display_via),
            style: self.style.apply(base.style),
            display_media: self.display_media.apply(base.display_media),
        }
    }
}

/// Merge `base` with an optional domain record.
///
/// Without a record the result equals `base`. With one, each field is taken
/// from the record unless it holds the inherit sentinel (`0`, or `auto` for
/// media handling). Neither input is modified.
pub fn merge(base: &DisplaySettings, record: Option<&DomainSettingsRecord>) -> DisplaySettings {
    match record {
        None => *base,
        Some(record) => Overrides::from_record(record).apply(base),
    }
}

/// Like [`merge`], but a missing record falls back to the default profile of
/// the domain's category.
pub fn resolve(
    base: &DisplaySettings,
    record: Option<&DomainSettingsRecord>,
    domain: &str,
) -> DisplaySettings {
    match record {
        Some(_) => merge(base, record),
        None => {
            let profile = default_profile(classify(domain));
            Overrides::from_profile(&profile.settings).apply(base)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MediaHandling;

    fn base() -> DisplaySettings {
        DisplaySettings {
            send_mode: 1,
            display_author: -1,
            display_via: -2,
            style: 1,
            display_media: 0,
        }
    }

    #[test]
    fn no_record_returns_base() {
        let b = base();
        let merged = merge(&b, None);
        assert_eq!(merged, b);
    }

    #[test]
    fn zero_send_mode_inherits() {
        let rec = DomainSettingsRecord::new("example.com");
        assert_eq!(merge(&base(), Some(&rec)).send_mode, 1);
    }

    #[test]
    fn nonzero_send_mode_overrides() {
        let mut rec = DomainSettingsRecord::new("example.com");
        rec.send_mode = 2;
        assert_eq!(merge(&base(), Some(&rec)).send_mode, 2);
    }

    #[test]
    fn every_integer_field_follows_sentinel_rule() {
        let mut rec = DomainSettingsRecord::new("example.com");
        rec.display_author = 1;
        rec.style = 2;
        let merged = merge(&base(), Some(&rec));
        assert_eq!(merged.display_author, 1);
        assert_eq!(merged.style, 2);
        assert_eq!(merged.display_via, -2);
        assert_eq!(merged.send_mode, 1);
    }

    #[test]
    fn all_inherit_record_equals_base() {
        let rec = DomainSettingsRecord::new("example.com");
        assert_eq!(merge(&base(), Some(&rec)), base());
    }

    #[test]
    fn media_handling_maps_into_display_media() {
        let mut b = base();
        b.display_media = 1;
        let mut rec = DomainSettingsRecord::new("example.com");

        rec.media_handling = MediaHandling::Auto;
        assert_eq!(merge(&b, Some(&rec)).display_media, 1);

        rec.media_handling = MediaHandling::Include;
        assert_eq!(merge(&b, Some(&rec)).display_media, 0);

        rec.media_handling = MediaHandling::Exclude;
        assert_eq!(merge(&b, Some(&rec)).display_media, -1);

        rec.media_handling = MediaHandling::OnlyMedia;
        assert_eq!(merge(&b, Some(&rec)).display_media, 1);
    }

    #[test]
    fn resolve_uses_record_when_present() {
        let mut rec = DomainSettingsRecord::new("careers.example.com");
        rec.display_via = 1;
        let resolved = resolve(&base(), Some(&rec), "careers.example.com");
        // The job-site profile is not consulted when a record exists.
        assert_eq!(resolved.display_author, -1);
        assert_eq!(resolved.display_via, 1);
    }

    #[test]
    fn resolve_falls_back_to_category_profile() {
        let job = resolve(&base(), None, "careers.example.com");
        assert_eq!(job.display_author, 1);
        assert_eq!(job.display_via, -2);

        let news = resolve(&base(), None, "dailynews.example.com");
        assert_eq!(news.display_via, 1);
        assert_eq!(news.display_author, -1);

        assert_eq!(resolve(&base(), None, "example.com"), base());
    }
}
