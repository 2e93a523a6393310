//! Translation of stored replacement text into `regex` replacement syntax.
//!
//! Stored rules refer to groups as `\1` or `\g<name>` and treat `$` as a
//! literal. The `regex` crate expects `${1}` / `${name}` and `$$`.

use regex::Regex;

/// Translate `raw` for use with `re`.
///
/// Errors on a trailing backslash, an unknown letter escape, a malformed
/// `\g<...>`, or a reference to a group `re` does not have.
pub(super) fn translate(raw: &str, re: &Regex) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len() + 8);
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' => out.push_str("$$"),
            '\\' => {
                let Some(next) = chars.next() else {
                    return Err("trailing backslash".to_string());
                };
                match next {
                    '\\' => out.push('\\'),
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    'f' => out.push('\u{0c}'),
                    'v' => out.push('\u{0b}'),
                    'a' => out.push('\u{07}'),
                    'b' => out.push('\u{08}'),
                    'g' => {
                        if chars.next() != Some('<') {
                            return Err("missing '<' after \\g".to_string());
                        }
                        let mut name = String::new();
                        loop {
                            match chars.next() {
                                Some('>') => break,
                                Some(ch) => name.push(ch),
                                None => return Err("unterminated \\g<...>".to_string()),
                            }
                        }
                        push_group(&mut out, &name, re)?;
                    }
                    '0' => out.push('\0'),
                    d @ '1'..='9' => {
                        let mut digits = d.to_string();
                        if let Some(&d2) = chars.peek() {
                            if d2.is_ascii_digit() {
                                digits.push(d2);
                                chars.next();
                            }
                        }
                        push_group(&mut out, &digits, re)?;
                    }
                    other if other.is_ascii_alphabetic() => {
                        return Err(format!("bad escape \\{other}"));
                    }
                    other => {
                        out.push('\\');
                        if other == '$' {
                            out.push_str("$$");
                        } else {
                            out.push(other);
                        }
                    }
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

fn push_group(out: &mut String, name: &str, re: &Regex) -> Result<(), String> {
    let known = match name.parse::<usize>() {
        Ok(index) => index < re.captures_len(),
        Err(_) => re.capture_names().flatten().any(|n| n == name),
    };
    if name.is_empty() || !known {
        return Err(format!("unknown group '{name}'"));
    }
    out.push_str("${");
    out.push_str(name);
    out.push('}');
    Ok(())
}
