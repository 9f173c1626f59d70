//! Date handling for stay intervals.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

const SECONDS_PER_DAY: i64 = 86_400;

/// A half-open stay interval `[check_in, check_out)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First instant of the stay.
    pub check_in: DateTime<Utc>,
    /// First instant after the stay.
    pub check_out: DateTime<Utc>,
}

impl DateRange {
    /// Build a range; `None` unless `check_in < check_out`.
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Option<Self> {
        (check_in < check_out).then_some(Self {
            check_in,
            check_out,
        })
    }

    /// Half-open overlap: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }

    /// Number of nights, rounding any partial day up.
    pub fn nights(&self) -> i64 {
        let seconds = (self.check_out - self.check_in).num_seconds();
        (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    }
}

/// Parse either a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date
/// (interpreted as midnight UTC).
pub fn parse_flexible(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Serde adapter for [`parse_flexible`].
pub fn deserialize_flexible<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
}

/// Serde adapter for an optional [`parse_flexible`] value.
pub fn deserialize_flexible_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_flexible(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DateTime<Utc> {
        parse_flexible(s).unwrap()
    }

    fn range(a: &str, b: &str) -> DateRange {
        DateRange::new(day(a), day(b)).unwrap()
    }

    #[test]
    fn test_rejects_empty_and_inverted_ranges() {
        assert!(DateRange::new(day("2025-03-10"), day("2025-03-10")).is_none());
        assert!(DateRange::new(day("2025-03-10"), day("2025-03-01")).is_none());
    }

    #[test]
    fn test_overlapping_ranges_conflict() {
        let existing = range("2025-03-01", "2025-03-10");
        let requested = range("2025-03-05", "2025-03-12");
        assert!(existing.overlaps(&requested));
        assert!(requested.overlaps(&existing));
    }

    #[test]
    fn test_touching_boundary_is_not_overlap() {
        let existing = range("2025-03-01", "2025-03-10");
        let requested = range("2025-03-10", "2025-03-15");
        assert!(!existing.overlaps(&requested));
        assert!(!requested.overlaps(&existing));
    }

    #[test]
    fn test_contained_range_overlaps() {
        let outer = range("2025-03-01", "2025-03-31");
        let inner = range("2025-03-10", "2025-03-11");
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn test_nights_round_partial_days_up() {
        assert_eq!(range("2025-03-01", "2025-03-10").nights(), 9);
        let partial = DateRange::new(
            day("2025-03-01T00:00:00Z"),
            day("2025-03-02T06:00:00Z"),
        )
        .unwrap();
        assert_eq!(partial.nights(), 2);
    }

    #[test]
    fn test_parse_accepts_both_formats() {
        assert_eq!(day("2025-03-01"), day("2025-03-01T00:00:00Z"));
        assert!(parse_flexible("03/01/2025").is_none());
    }
}
