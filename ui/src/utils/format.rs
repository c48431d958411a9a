//! Text formatting for table cells.

use chrono::{DateTime, NaiveDate};

/// Shortens `text` to `max_chars` characters followed by `...`.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Renders an RFC 3339 timestamp or a plain date as `YYYY-MM-DD`.
///
/// Anything unparsable is shown as is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_owned()
}
