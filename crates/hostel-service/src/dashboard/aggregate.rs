//! Pure dashboard arithmetic.

use hostel_database::repositories::dashboard::MonthlyRevenueRow;

/// Spread per-month revenue rows over twelve slots, January first.
/// Months outside 1-12 are ignored.
pub fn monthly_slots(rows: &[MonthlyRevenueRow]) -> [f64; 12] {
    let mut slots = [0.0; 12];
    for row in rows {
        if (1..=12).contains(&row.month) {
            slots[(row.month - 1) as usize] += row.revenue;
        }
    }
    slots
}

/// Percentage of occupied rooms, two decimals. Zero without rooms.
pub fn occupancy_rate(occupied: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let rate = occupied as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_slots_fill_gaps_with_zero() {
        let rows = vec![
            MonthlyRevenueRow { month: 1, revenue: 1500.0 },
            MonthlyRevenueRow { month: 3, revenue: 700.5 },
            MonthlyRevenueRow { month: 12, revenue: 20.0 },
        ];
        let slots = monthly_slots(&rows);
        assert_eq!(slots[0], 1500.0);
        assert_eq!(slots[1], 0.0);
        assert_eq!(slots[2], 700.5);
        assert_eq!(slots[11], 20.0);
        assert_eq!(slots.iter().sum::<f64>(), 2220.5);
    }

    #[test]
    fn test_occupancy_rate() {
        assert_eq!(occupancy_rate(1, 3), 33.33);
        assert_eq!(occupancy_rate(2, 3), 66.67);
        assert_eq!(occupancy_rate(5, 5), 100.0);
        assert_eq!(occupancy_rate(0, 0), 0.0);
    }
}
