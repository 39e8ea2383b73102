//! Shared utility functions.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of free text for log lines.
///
/// Runs of whitespace (including newlines) collapse to one space, and the
/// result is cut to `max_bytes` with a trailing `...` when shortened.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_bytes {
        return flat;
    }
    format!("{}...", truncate_str(&flat, max_bytes))
}
