//! Time utilities: parsing HH:MM marks, second-granularity truncation,
//! duration splitting.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static HHMM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}$").unwrap());

/// Parse an HH:MM clock mark. The input must already be in ASCII digits
/// (see `utils::digits`); callers normalize before parsing.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !HHMM_RE.is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Drop the sub-second component. The resolver compares instants at second
/// granularity, so the current instant is truncated once at the call
/// boundary instead of inside the comparison logic.
pub fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Split a non-negative number of seconds into (hours, minutes, seconds).
pub fn split_hms(total_secs: i64) -> (i64, i64, i64) {
    let s = total_secs.max(0);
    (s / 3600, (s % 3600) / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_clock() {
        assert_eq!(
            parse_time("05:06"),
            Some(NaiveTime::from_hms_opt(5, 6, 0).unwrap())
        );
        assert_eq!(
            parse_time("6:03"),
            Some(NaiveTime::from_hms_opt(6, 3, 0).unwrap())
        );
    }

    #[test]
    fn rejects_malformed_clock() {
        assert!(parse_time("5:6").is_none());
        assert!(parse_time("25:00").is_none());
        assert!(parse_time("05:60").is_none());
        assert!(parse_time("iftar").is_none());
        assert!(parse_time("০৫:০৬").is_none()); // must be normalized first
    }

    #[test]
    fn splits_hms() {
        assert_eq!(split_hms(0), (0, 0, 0));
        assert_eq!(split_hms(59), (0, 0, 59));
        assert_eq!(split_hms(3661), (1, 1, 1));
        assert_eq!(split_hms(-5), (0, 0, 0));
    }
}
