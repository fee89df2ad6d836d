//! Publish date reformatting.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Output format, e.g. `22 Mar 2023`.
pub const PUBLISH_DATE_FORMAT: &str = "%d %b %Y";

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Reformat an ISO-8601 style date or date-time as `DD Mon YYYY`.
///
/// A `Z` suffix is read as `+00:00`. Offsets may be written with or without
/// a colon. The calendar date is taken in the parsed offset. Input that does
/// not parse is returned unchanged.
pub fn reformat_date(input: &str) -> String {
    match parse_date(&input.replace('Z', "+00:00")) {
        Some(date) => date.format(PUBLISH_DATE_FORMAT).to_string(),
        None => input.to_string(),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::<FixedOffset>::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date_naive());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
