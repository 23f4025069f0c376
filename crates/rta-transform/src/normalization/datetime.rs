//! Date/time normalization.
//!
//! Operator files carry timestamps in whatever shape the authoring tool
//! produced. Parsing tries a fixed ordered list of accepted patterns; the
//! first pattern that consumes the full string wins. Day-first patterns are
//! declared before month-first, so `15/03/2024` reads as March 15 and
//! `03/15/2024` still resolves via the month-first fallback.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::context::TransformContext;
use crate::normalized::Normalized;

/// Accepted full date-time patterns, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y.%m.%d %H:%M:%S",
    "%Y%m%d%H%M%S",
    "%d/%m/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Accepted date-only patterns, tried after the date-time patterns.
/// Midnight fills in the missing time component.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
];

/// Parses a timestamp against the accepted pattern list.
///
/// Returns `None` when no pattern consumes the full trimmed string.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Normalizes a timestamp cell, falling back to the batch time.
pub fn normalize_datetime(raw: &str, ctx: &TransformContext) -> Normalized<NaiveDateTime> {
    match parse_datetime(raw) {
        Some(dt) => Normalized::matched(dt),
        None => Normalized::defaulted(ctx.batch_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn ctx() -> TransformContext {
        TransformContext::new(at(2024, 6, 1, 12, 0, 0))
    }

    #[test]
    fn parses_iso_and_slash_datetimes() {
        assert_eq!(
            parse_datetime("2024-03-15T10:00:00"),
            Some(at(2024, 3, 15, 10, 0, 0))
        );
        assert_eq!(
            parse_datetime("2024/03/15 10:00:00"),
            Some(at(2024, 3, 15, 10, 0, 0))
        );
    }

    #[test]
    fn parses_compact_and_dotted_forms() {
        assert_eq!(parse_datetime("20240315100000"), Some(at(2024, 3, 15, 10, 0, 0)));
        assert_eq!(parse_datetime("2024.03.15"), Some(at(2024, 3, 15, 0, 0, 0)));
        assert_eq!(parse_datetime("20240315"), Some(at(2024, 3, 15, 0, 0, 0)));
    }

    #[test]
    fn date_only_fills_midnight() {
        assert_eq!(parse_datetime(" 2024-03-15 "), Some(at(2024, 3, 15, 0, 0, 0)));
    }

    #[test]
    fn day_first_wins_when_both_orderings_parse() {
        // 02/03 is ambiguous; the day-first pattern is declared earlier.
        assert_eq!(parse_datetime("02/03/2024"), Some(at(2024, 3, 2, 0, 0, 0)));
        // Month 15 is impossible, so month-first picks this one up.
        assert_eq!(parse_datetime("03/15/2024"), Some(at(2024, 3, 15, 0, 0, 0)));
    }

    #[test]
    fn rejects_partial_and_garbage_input() {
        assert_eq!(parse_datetime("2024-03-15 extra"), None);
        assert_eq!(parse_datetime("soon"), None);
        assert_eq!(parse_datetime(""), None);
    }

    #[test]
    fn normalize_defaults_to_batch_time() {
        let out = normalize_datetime("not a date", &ctx());
        assert!(out.defaulted);
        assert_eq!(out.value, at(2024, 6, 1, 12, 0, 0));

        let out = normalize_datetime("2024/03/15 10:00:00", &ctx());
        assert!(!out.defaulted);
        assert_eq!(out.value, at(2024, 3, 15, 10, 0, 0));
    }
}
