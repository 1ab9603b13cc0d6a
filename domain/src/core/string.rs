//! String utilities for the domain layer.

/// Shorten text for log lines, cutting on a character boundary.
///
/// Keeps at most `max_chars` characters and appends `...` when anything
/// was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", &s[..end]),
    }
}
