//! Content filter rules and the pipeline that applies them.
//!
//! A [`FilterSpec`] is stored as JSON alongside a domain record:
//!
//! ```json
//! {
//!   "remove_patterns": ["^Apply now.*$"],
//!   "replace_patterns": [{ "pattern": "\\s+-\\s+via .*$", "replacement": "" }]
//! }
//! ```
//!
//! Rules are user-authored and may be malformed. The pipeline skips bad rules
//! and reports them in [`FilterOutcome::skipped`] instead of failing.

mod pipeline;
mod replacement;

use serde::Serialize;
use serde_json::Value;

pub use pipeline::{apply, apply_with_diagnostics, normalize_whitespace};

/// One replacement rule. Either field may be missing in stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceRule {
    pub pattern: Option<String>,
    pub replacement: Option<String>,
}

impl ReplaceRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            replacement: Some(replacement.into()),
        }
    }
}

/// Ordered removal and replacement rules for item content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(from = "Value")]
pub struct FilterSpec {
    pub remove_patterns: Vec<String>,
    pub replace_patterns: Vec<ReplaceRule>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.remove_patterns.is_empty() && self.replace_patterns.is_empty()
    }

    /// Lenient decode of the stored JSON shape.
    ///
    /// Non-string removal entries are dropped. Replacement entries that are
    /// not objects, or whose fields are not strings, keep their position with
    /// the offending field unset so the pipeline reports them by index.
    pub fn from_json_value(value: &Value) -> Self {
        let remove_patterns = value
            .get("remove_patterns")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| {
                        let s = v.as_str();
                        if s.is_none() {
                            tracing::warn!(entry = %v, "dropping non-string remove pattern");
                        }
                        s.map(str::to_string)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let replace_patterns = value
            .get("replace_patterns")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|v| ReplaceRule {
                        pattern: v.get("pattern").and_then(Value::as_str).map(str::to_string),
                        replacement: v
                            .get("replacement")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            remove_patterns,
            replace_patterns,
        }
    }
}

impl From<Value> for FilterSpec {
    fn from(value: Value) -> Self {
        Self::from_json_value(&value)
    }
}

/// Pipeline stage a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    Remove,
    Replace,
}

/// Why a rule was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The pattern does not compile.
    InvalidPattern(String),
    /// The replacement text refers to a missing group or uses a bad escape.
    InvalidReplacement(String),
    /// A replacement entry lacks `pattern` or `replacement`.
    MissingField(&'static str),
}

/// A rule the pipeline did not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRule {
    pub stage: FilterStage,
    /// Position of the rule within its stage's list.
    pub index: usize,
    pub reason: SkipReason,
}

/// Best-effort pipeline output plus the rules that were skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    pub content: String,
    pub skipped: Vec<SkippedRule>,
}
