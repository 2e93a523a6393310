//! URL or bare host -> canonical domain.

/// Prefix stripped from hosts so `www.example.com` and `example.com` share settings.
const WWW_PREFIX: &str = "www.";

/// Extracts the canonical domain from a URL or a bare host.
///
/// Returns an empty string when no host can be determined. Never panics.
///
/// Bare hosts (`example.com`, `Example.com/feed`) are retried with an
/// `http://` scheme so that canonicalizing an already-canonical domain
/// yields itself.
///
/// # Examples
///
/// - `extract_domain("https://www.Example.com/feed?x=1")` → `"example.com"`
/// - `extract_domain("example.com")` → `"example.com"`
/// - `extract_domain("not a url")` → `""`
pub fn extract_domain(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return String::new();
    }

    let parsed = match url::Url::parse(input) {
        Ok(u) => Some(u),
        Err(_) if !input.contains("://") => url::Url::parse(&format!("http://{input}")).ok(),
        Err(_) => None,
    };

    let Some(host) = parsed.as_ref().and_then(|u| u.host_str()) else {
        return String::new();
    };

    let host = host.to_lowercase();
    match host.strip_prefix(WWW_PREFIX) {
        Some(rest) => rest.to_string(),
        None => host,
    }
}
