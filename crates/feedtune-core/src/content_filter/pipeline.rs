//! Remove → replace → normalize.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::replacement;
use super::{FilterOutcome, FilterSpec, FilterStage, SkipReason, SkippedRule};

/// Three or more line breaks, with any whitespace between them.
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("blank-run pattern is valid"));

/// Apply `spec` to `content`, discarding diagnostics.
///
/// Without a spec the content is returned untouched.
pub fn apply(content: &str, spec: Option<&FilterSpec>) -> String {
    apply_with_diagnostics(content, spec).content
}

/// Apply `spec` to `content`, reporting every rule that was skipped.
///
/// Rules are compiled case-insensitive and multi-line. A rule that fails to
/// compile, or a replacement entry missing a field, is skipped; the remaining
/// rules still run and normalization always happens when a spec is given.
///
/// A stored `{}` decodes to an empty spec, so it is not the identity: blank
/// line runs in `content` are still collapsed. Only `None` leaves the content
/// byte-for-byte unchanged.
pub fn apply_with_diagnostics(content: &str, spec: Option<&FilterSpec>) -> FilterOutcome {
    let Some(spec) = spec else {
        return FilterOutcome {
            content: content.to_string(),
            skipped: Vec::new(),
        };
    };

    let mut skipped = Vec::new();
    let mut text = content.to_string();

    for (index, pattern) in spec.remove_patterns.iter().enumerate() {
        match compile(pattern) {
            Ok(re) => text = re.replace_all(&text, "").into_owned(),
            Err(reason) => skipped.push(skip(FilterStage::Remove, index, reason)),
        }
    }

    for (index, rule) in spec.replace_patterns.iter().enumerate() {
        match replace_one(&text, rule.pattern.as_deref(), rule.replacement.as_deref()) {
            Ok(next) => text = next,
            Err(reason) => skipped.push(skip(FilterStage::Replace, index, reason)),
        }
    }

    FilterOutcome {
        content: normalize_whitespace(&text),
        skipped,
    }
}

/// Collapse runs of blank lines to a single blank line and trim the ends.
///
/// Idempotent.
pub fn normalize_whitespace(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").trim().to_string()
}

fn compile(pattern: &str) -> Result<Regex, SkipReason> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|e| SkipReason::InvalidPattern(e.to_string()))
}

fn replace_one(
    text: &str,
    pattern: Option<&str>,
    replacement: Option<&str>,
) -> Result<String, SkipReason> {
    let pattern = pattern.ok_or(SkipReason::MissingField("pattern"))?;
    let replacement = replacement.ok_or(SkipReason::MissingField("replacement"))?;
    let re = compile(pattern)?;
    let replacement =
        replacement::translate(replacement, &re).map_err(SkipReason::InvalidReplacement)?;
    Ok(re.replace_all(text, replacement.as_str()).into_owned())
}

fn skip(stage: FilterStage, index: usize, reason: SkipReason) -> SkippedRule {
    tracing::warn!(?stage, index, ?reason, "skipping content filter rule");
    SkippedRule {
        stage,
        index,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_filter::ReplaceRule;

    fn spec(remove: &[&str], replace: &[(&str, &str)]) -> FilterSpec {
        FilterSpec {
            remove_patterns: remove.iter().map(|s| s.to_string()).collect(),
            replace_patterns: replace.iter().map(|(p, r)| ReplaceRule::new(*p, *r)).collect(),
        }
    }

    #[test]
    fn no_spec_is_identity() {
        let content = "  a\n\n\n\nb  ";
        assert_eq!(apply(content, None), content);
    }

    #[test]
    fn empty_spec_only_normalizes() {
        assert_eq!(apply("a\n\n\n\nb", Some(&FilterSpec::default())), "a\n\nb");
        let stored: FilterSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(apply("a\n\n\n\nb", Some(&stored)), "a\n\nb");
    }

    #[test]
    fn removal_is_case_insensitive_and_multiline() {
        let s = spec(&["^apply now.*$"], &[]);
        let out = apply("Great role\nAPPLY NOW at example.com\nThanks", Some(&s));
        assert_eq!(out, "Great role\n\nThanks");
    }

    #[test]
    fn invalid_removal_pattern_is_skipped_and_others_apply() {
        let s = spec(&["foo", "(unclosed", "bar"], &[]);
        let outcome = apply_with_diagnostics("foo baz bar", Some(&s));
        assert_eq!(outcome.content, "baz");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].stage, FilterStage::Remove);
        assert_eq!(outcome.skipped[0].index, 1);
        assert!(matches!(
            outcome.skipped[0].reason,
            SkipReason::InvalidPattern(_)
        ));
    }

    #[test]
    fn lookaround_patterns_are_reported_not_fatal() {
        let s = spec(&["(?<=x)y"], &[("b", "c")]);
        let outcome = apply_with_diagnostics("xy b", Some(&s));
        assert_eq!(outcome.content, "xy c");
        assert_eq!(outcome.skipped.len(), 1);
    }

    #[test]
    fn replacements_run_in_order_after_removals() {
        let s = spec(&["remove me"], &[("cat", "dog"), ("dog", "bird")]);
        assert_eq!(apply("Remove me: CAT", Some(&s)), ": bird");
    }

    #[test]
    fn replacement_backreferences() {
        let s = spec(&[], &[(r"(\w+)@(\w+)", r"\2 at \1"), ("price", "$5")]);
        assert_eq!(apply("user@host price", Some(&s)), "host at user $5");
    }

    #[test]
    fn replace_entries_missing_fields_are_skipped() {
        let s = FilterSpec {
            remove_patterns: vec![],
            replace_patterns: vec![
                ReplaceRule {
                    pattern: Some("a".into()),
                    replacement: None,
                },
                ReplaceRule {
                    pattern: None,
                    replacement: Some("b".into()),
                },
                ReplaceRule::new("c", "d"),
                ReplaceRule::new("[", "e"),
                ReplaceRule::new("(x)", r"\3"),
            ],
        };
        let outcome = apply_with_diagnostics("a c x", Some(&s));
        assert_eq!(outcome.content, "a d x");
        let reasons: Vec<_> = outcome.skipped.iter().map(|s| (s.index, s.reason.clone())).collect();
        assert_eq!(reasons[0], (0, SkipReason::MissingField("replacement")));
        assert_eq!(reasons[1], (1, SkipReason::MissingField("pattern")));
        assert!(matches!(reasons[2], (3, SkipReason::InvalidPattern(_))));
        assert!(matches!(reasons[3], (4, SkipReason::InvalidReplacement(_))));
    }

    #[test]
    fn normalization_collapses_blank_runs_with_inner_whitespace() {
        assert_eq!(normalize_whitespace("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_whitespace("a\n  \n\t\n \nb"), "a\n\nb");
        assert_eq!(normalize_whitespace("a\n\nb"), "a\n\nb");
        assert_eq!(normalize_whitespace("\n\n  a  \n"), "a");
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in [
            "a\n\n\n\nb",
            "  x \n \n \n \n y \n\n\n",
            "a\r\n\r\n\r\nb",
            "\n\n\n",
            "plain",
        ] {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn apply_is_idempotent_for_idempotent_rules() {
        let s = spec(&[r"#ad\b"], &[(r"\s+via\s+\S+$", "")]);
        let content = "Headline #ad\n\n\n\nBody via example.com\n";
        let once = apply(content, Some(&s));
        assert_eq!(apply(&once, Some(&s)), once);
    }

    #[test]
    fn deterministic() {
        let s = spec(&["x+", "(bad"], &[("y", "z")]);
        let a = apply_with_diagnostics("xxy\n\n\n\nyx", Some(&s));
        let b = apply_with_diagnostics("xxy\n\n\n\nyx", Some(&s));
        assert_eq!(a, b);
    }
}
