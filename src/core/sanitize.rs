// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) to one space and trim.
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

/// Case-insensitive containment on whitespace-normalised text.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let h = normalize_ws(haystack).to_lowercase();
    let n = normalize_ws(needle).to_lowercase();
    !n.is_empty() && h.contains(&n)
}

/// Markdown heading/bullet markers at line start would change the outline
/// when the output is read back; escape them.
pub fn escape_md_line(s: &str) -> String {
    match s.chars().next() {
        Some('#') | Some('-') | Some('*') | Some('+') | Some('>') => join!("\\", s),
        _ => s!(s),
    }
}
