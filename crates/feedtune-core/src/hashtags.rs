//! Base + per-domain hashtag merging.

use std::collections::HashSet;

/// Combine `base` hashtags with a domain's hashtags.
///
/// Without domain hashtags (absent or empty) `base` is returned in its
/// original order. Otherwise the result is the deduplicated union of both
/// lists and its order is unspecified; callers must not depend on it.
pub fn merge(base: &[String], domain: Option<&[String]>) -> Vec<String> {
    let domain = match domain {
        Some(d) if !d.is_empty() => d,
        _ => return base.to_vec(),
    };

    base.iter()
        .chain(domain)
        .cloned()
        .collect::<HashSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn as_set(v: Vec<String>) -> HashSet<String> {
        v.into_iter().collect()
    }

    #[test]
    fn union_has_each_tag_once() {
        let merged = merge(&tags(&["#A", "#B"]), Some(tags(&["#B", "#C"]).as_slice()));
        assert_eq!(merged.len(), 3);
        assert_eq!(as_set(merged), as_set(tags(&["#A", "#B", "#C"])));
    }

    #[test]
    fn duplicates_within_base_are_removed_on_union() {
        let merged = merge(&tags(&["#A", "#A"]), Some(tags(&["#A"]).as_slice()));
        assert_eq!(merged, tags(&["#A"]));
    }

    #[test]
    fn absent_or_empty_domain_keeps_base_order() {
        let base = tags(&["#Z", "#A", "#Z"]);
        assert_eq!(merge(&base, None), base);
        assert_eq!(merge(&base, Some(&[][..])), base);
    }

    #[test]
    fn empty_base_with_domain_tags() {
        let merged = merge(&[], Some(tags(&["#News", "#News"]).as_slice()));
        assert_eq!(merged, tags(&["#News"]));
    }

    #[test]
    fn tags_are_case_sensitive() {
        let merged = merge(&tags(&["#news"]), Some(tags(&["#News"]).as_slice()));
        assert_eq!(merged.len(), 2);
    }
}
