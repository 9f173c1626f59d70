//! Complaint statistics computed from projection rows.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Months, Utc};
use serde::Serialize;

use hostel_database::repositories::complaint::ComplaintStatRow;
use hostel_entity::complaint::ComplaintStatus;

/// Months covered by the trend, counting back from now.
pub const TREND_MONTHS: u32 = 6;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Complaint counts for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: i64,
}

/// Days from filing to resolution, as two-decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionTime {
    pub average: String,
    pub minimum: String,
    pub maximum: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
    pub total: i64,
    pub by_status: BTreeMap<String, i64>,
    pub by_type: BTreeMap<String, i64>,
    pub by_priority: BTreeMap<String, i64>,
    pub by_block: BTreeMap<String, i64>,
    pub monthly_trend: Vec<MonthlyCount>,
    pub resolution_time: Option<ResolutionTime>,
}

impl ComplaintStats {
    /// Aggregate `rows`, all of which already match the caller's scope.
    pub fn compute(rows: &[ComplaintStatRow], now: DateTime<Utc>) -> Self {
        let mut stats = ComplaintStats {
            total: rows.len() as i64,
            ..Default::default()
        };

        let trend_start = now
            .checked_sub_months(Months::new(TREND_MONTHS))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let mut trend: BTreeMap<(i32, u32), i64> = BTreeMap::new();
        let mut durations = Vec::new();

        for row in rows {
            *stats.by_status.entry(row.status.to_string()).or_default() += 1;
            *stats.by_type.entry(row.complaint_type.to_string()).or_default() += 1;
            *stats.by_priority.entry(row.priority.to_string()).or_default() += 1;
            *stats.by_block.entry(row.hostel_block.clone()).or_default() += 1;

            if row.created_at >= trend_start {
                *trend
                    .entry((row.created_at.year(), row.created_at.month()))
                    .or_default() += 1;
            }

            if let (ComplaintStatus::Resolved, Some(resolved_at)) = (row.status, row.resolved_at) {
                let millis = (resolved_at - row.created_at).num_milliseconds() as f64;
                durations.push(millis / MILLIS_PER_DAY);
            }
        }

        stats.monthly_trend = trend
            .into_iter()
            .map(|((year, month), count)| MonthlyCount { year, month, count })
            .collect();
        stats.resolution_time = resolution_time(&durations);
        stats
    }
}

fn resolution_time(days: &[f64]) -> Option<ResolutionTime> {
    if days.is_empty() {
        return None;
    }
    let sum: f64 = days.iter().sum();
    let min = days.iter().copied().fold(f64::INFINITY, f64::min);
    let max = days.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(ResolutionTime {
        average: format!("{:.2}", sum / days.len() as f64),
        minimum: format!("{min:.2}"),
        maximum: format!("{max:.2}"),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use hostel_entity::complaint::{ComplaintPriority, ComplaintType};

    use super::*;

    fn row(
        status: ComplaintStatus,
        block: &str,
        created_at: DateTime<Utc>,
        resolved_after: Option<Duration>,
    ) -> ComplaintStatRow {
        ComplaintStatRow {
            status,
            complaint_type: ComplaintType::Plumbing,
            priority: ComplaintPriority::Medium,
            hostel_block: block.to_string(),
            created_at,
            resolved_at: resolved_after.map(|d| created_at + d),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_status_counts_sum_to_total() {
        let rows = vec![
            row(ComplaintStatus::Pending, "A", now(), None),
            row(ComplaintStatus::Pending, "B", now(), None),
            row(ComplaintStatus::InProgress, "A", now(), None),
            row(ComplaintStatus::Resolved, "A", now() - Duration::days(4), Some(Duration::days(2))),
            row(ComplaintStatus::Rejected, "C", now(), None),
        ];
        let stats = ComplaintStats::compute(&rows, now());

        assert_eq!(stats.total, 5);
        assert_eq!(stats.by_status.values().sum::<i64>(), stats.total);
        assert_eq!(stats.by_status["pending"], 2);
        assert_eq!(stats.by_status["in-progress"], 1);
        assert_eq!(stats.by_block["A"], 3);
        assert_eq!(stats.by_type["plumbing"], 5);
    }

    #[test]
    fn test_trend_covers_six_months_ascending() {
        let rows = vec![
            row(ComplaintStatus::Pending, "A", Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(), None),
            row(ComplaintStatus::Pending, "A", Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap(), None),
            row(ComplaintStatus::Pending, "A", Utc.with_ymd_and_hms(2025, 1, 21, 0, 0, 0).unwrap(), None),
            row(ComplaintStatus::Pending, "A", Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap(), None),
        ];
        let stats = ComplaintStats::compute(&rows, now());

        assert_eq!(
            stats.monthly_trend,
            vec![
                MonthlyCount { year: 2025, month: 1, count: 2 },
                MonthlyCount { year: 2025, month: 6, count: 1 },
            ]
        );
        assert_eq!(stats.total, 4);
    }

    #[test]
    fn test_resolution_time_in_days() {
        let rows = vec![
            row(ComplaintStatus::Resolved, "A", now(), Some(Duration::hours(36))),
            row(ComplaintStatus::Resolved, "A", now(), Some(Duration::days(3))),
            row(ComplaintStatus::Resolved, "A", now(), None),
            row(ComplaintStatus::InProgress, "A", now(), Some(Duration::days(30))),
        ];
        let stats = ComplaintStats::compute(&rows, now());

        assert_eq!(
            stats.resolution_time,
            Some(ResolutionTime {
                average: "2.25".to_string(),
                minimum: "1.50".to_string(),
                maximum: "3.00".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_scope() {
        let stats = ComplaintStats::compute(&[], now());
        assert_eq!(stats.total, 0);
        assert!(stats.by_status.is_empty());
        assert!(stats.resolution_time.is_none());
    }
}
