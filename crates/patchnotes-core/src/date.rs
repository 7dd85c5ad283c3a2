//! Release date display policy
//!
//! Dates render as a two-digit day, a lowercase abbreviated month and a
//! four-digit year (`31 jan 2026`). The date is a calendar date, so no time
//! zone shifting happens between the data file and the page.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::types::Locale;

/// Parse a `YYYY-MM-DD` date, or the calendar date of an RFC 3339 timestamp
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Format a parsed date for display
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    format!(
        "{:02} {} {:04}",
        date.day(),
        locale.month_abbrev(date.month()),
        date.year()
    )
}

/// Format a raw date string, showing it verbatim when it does not parse
pub fn format_release_date(raw: &str, locale: Locale) -> String {
    match parse_release_date(raw) {
        Some(date) => format_date(date, locale),
        None => {
            tracing::debug!(date = raw, "Unparsable release date, showing verbatim");
            raw.trim().to_string()
        }
    }
}
