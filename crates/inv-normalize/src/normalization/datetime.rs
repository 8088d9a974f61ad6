//! Date formatting for list and detail views.
//!
//! Dates are shown as `dd-Mon-yyyy` with Indonesian short month names, e.g.
//! `17-Agu-2023`. Timestamps carrying an offset are shown in that offset's
//! calendar date; no conversion to the local zone is made.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use inv_model::NullableTime;

use super::nullable::valid_timestamp;

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses the calendar date out of a backend date or timestamp string.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` (optionally with
/// a space separator or fractional seconds) and plain `YYYY-MM-DD`.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Formats a date as `dd-Mon-yyyy`.
pub fn format_indonesian_date(date: NaiveDate) -> String {
    let month = MONTHS_ID[date.month0() as usize];
    format!("{:02}-{}-{}", date.day(), month, date.year())
}

/// Formats a backend date string for display.
///
/// Unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_display_date(value) {
        Some(date) => format_indonesian_date(date),
        None => value.to_string(),
    }
}

/// Formats a nullable timestamp, or returns an empty string when the field is
/// absent or invalid.
pub fn format_timestamp(field: Option<&NullableTime>) -> String {
    valid_timestamp(field).map(format_date).unwrap_or_default()
}
