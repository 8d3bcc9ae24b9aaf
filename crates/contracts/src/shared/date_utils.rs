//! Utilities for parsing and formatting the date strings exchanged with the API
//!
//! The server stores dates as whatever the client submitted (usually `YYYY-MM-DD`
//! from a date input) or as full ISO timestamps, so parsing has to accept both.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Sentinel returned by [`format_date`] for values that are not dates
pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a date-like string into an instant.
///
/// Accepted shapes:
/// - RFC 3339 with offset: `2024-03-15T14:02:26.123Z`, `2024-03-15T14:02:26+05:30`
/// - naive date-time, interpreted in `tz`: `2024-03-15T14:02:26`, `2024-03-15 14:02`
/// - date only, interpreted as midnight in `tz`: `2024-03-15`
///
/// Date-only values are deliberately *not* read as UTC midnight (what a browser's
/// `new Date("2024-03-15")` does): local midnight keeps the displayed calendar day
/// equal to the entered one in every timezone, and expiry flips at local midnight.
/// Do not switch this to UTC without changing the expiry rules with it.
pub fn parse_date_like<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    // `earliest` covers DST gaps/overlaps instead of giving up on them
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a date-like string as `YYYY-MM-DD` in the calendar of `tz`.
/// Returns [`INVALID_DATE`] when the value cannot be parsed.
pub fn format_date_in<Tz: TimeZone>(value: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match parse_date_like(value, tz) {
        Some(instant) => instant.with_timezone(tz).format("%Y-%m-%d").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a date-like string as `YYYY-MM-DD` in local time.
/// Example: "2024-03-15" -> "2024-03-15", "garbage" -> "Invalid Date"
pub fn format_date(value: &str) -> String {
    format_date_in(value, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_date_only() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("  2024-12-31 "), "2024-12-31");
    }

    #[test]
    fn test_format_naive_datetime() {
        assert_eq!(format_date("2024-03-15T14:02:26"), "2024-03-15");
        assert_eq!(format_date("2024-03-15 23:59"), "2024-03-15");
    }

    #[test]
    fn test_format_rfc3339_uses_target_calendar() {
        assert_eq!(format_date_in("2024-03-15T14:02:26.123Z", &Utc), "2024-03-15");

        // 22:30 UTC is already the next day at +05:30
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(format_date_in("2024-03-15T22:30:00Z", &ist), "2024-03-16");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_date("invalid"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("2024-13-45"), INVALID_DATE);
    }

    #[test]
    fn test_parse_date_only_is_local_midnight() {
        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
        let parsed = parse_date_like("2024-03-15", &plus_three).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-14T21:00:00+00:00");
    }

    #[test]
    fn test_date_only_keeps_calendar_day_west_of_utc() {
        // UTC midnight would show 2024-03-14 at -05:00
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        let parsed = parse_date_like("2024-03-15", &minus_five).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-15T05:00:00+00:00");
        assert_eq!(format_date_in("2024-03-15", &minus_five), "2024-03-15");
    }
}
