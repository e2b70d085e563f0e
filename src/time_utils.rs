// SPDX-License-Identifier: MIT

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
///
/// All stored exercise dates go through this, so range filters can compare
/// the strings lexicographically.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a UTC timestamp as a human-readable calendar string,
/// e.g. `Wed Feb 01 2023` (weekday, month, day, year).
pub fn format_date_string(date: DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Parse a client-supplied date.
///
/// Accepts a bare calendar date (`2023-02-01`, taken as midnight UTC) or a
/// full RFC3339 timestamp. Returns `None` for anything else.
pub fn parse_client_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date_string_pads_day() {
        let date = Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date_string(date), "Wed Feb 01 2023");
    }

    #[test]
    fn test_parse_bare_calendar_date() {
        let parsed = parse_client_date("2023-01-15").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let parsed = parse_client_date("2023-01-15T10:30:00-08:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 15, 18, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_client_date("not-a-date").is_none());
        assert!(parse_client_date("2023-13-45").is_none());
        assert!(parse_client_date("").is_none());
    }

    #[test]
    fn test_rfc3339_round_trip_is_lexicographically_ordered() {
        let early = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        assert!(format_utc_rfc3339(early) < format_utc_rfc3339(late));
    }
}
