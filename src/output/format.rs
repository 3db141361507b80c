//! Per-field display formatting
//!
//! Absent values render as [`EMPTY_VALUE`] in table and CSV output.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Placeholder for absent values
pub const EMPTY_VALUE: &str = "-";

/// Long free-text fields are cut to this many characters
pub const SHORTEN_LIMIT: usize = 80;

pub fn fmt_opt<V: ToString>(value: Option<V>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| EMPTY_VALUE.to_string())
}

/// Timestamps render in UTC, RFC 3339 with second precision
pub fn fmt_time(value: Option<&DateTime<FixedOffset>>) -> String {
    value
        .map(|t| {
            t.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        })
        .unwrap_or_else(|| EMPTY_VALUE.to_string())
}

/// `yes` for a positive count, the placeholder otherwise
pub fn yes_if_positive(value: Option<i64>) -> String {
    match value {
        Some(n) if n > 0 => "yes".to_string(),
        _ => EMPTY_VALUE.to_string(),
    }
}

/// Cut text longer than [`SHORTEN_LIMIT`] characters and mark it with `...`
pub fn shorten(value: &str) -> String {
    match value.char_indices().nth(SHORTEN_LIMIT) {
        Some((idx, _)) => format!("{}...", &value[..idx]),
        None => value.to_string(),
    }
}

/// Join names with commas, or the placeholder when there are none
pub fn join_names<'a, I: IntoIterator<Item = &'a str>>(names: I) -> String {
    let joined = names.into_iter().collect::<Vec<_>>().join(",");
    if joined.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        joined
    }
}
