use std::borrow::Cow;

use chrono::{DateTime, NaiveDate};

pub const UNKNOWN_DATE: &str = "Unknown date";

/// Longest description shown on a result card, in characters.
pub const DESCRIPTION_LIMIT: usize = 120;

/// Formats an API timestamp as `Jun 5, 2020`.
pub fn format_date(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(parse_date)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    // "2020-06-05", "2020-06-05T12:00:00", "2020-06-05 12:00:00"
    value
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
}

pub fn truncate_description(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((end, _)) => Cow::Owned(format!("{}...", &text[..end])),
        None => Cow::Borrowed(text),
    }
}

pub fn result_count_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("Showing {count} result{suffix}")
}

pub fn launch_number(id: u32) -> String {
    format!("{id:02}")
}
