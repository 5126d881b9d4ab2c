// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First whitespace-delimited token, if any.
pub fn leading_token(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}

/// Nationality code from a flag marker class, e.g. `"de"` → `"DE"`.
pub fn country_code(class: &str) -> Option<String> {
    let c = class.trim();
    if c.is_empty() || !c.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    Some(c.to_ascii_uppercase())
}
