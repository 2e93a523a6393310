//! Title templates.
//!
//! A template may contain `{title}` and `{feed_title}`. Any other braces are
//! copied as-is, and substituted text is never expanded again.

const TITLE: &str = "{title}";
const FEED_TITLE: &str = "{feed_title}";

/// Render `template` for an item.
///
/// A missing or empty template leaves `title` unchanged.
pub fn render(title: &str, template: Option<&str>, feed_title: &str) -> String {
    let Some(template) = template.filter(|t| !t.is_empty()) else {
        return title.to_string();
    };

    let mut out = String::with_capacity(template.len() + title.len() + feed_title.len());
    let mut rest = template;
    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(TITLE) {
            out.push_str(title);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(FEED_TITLE) {
            out.push_str(feed_title);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
