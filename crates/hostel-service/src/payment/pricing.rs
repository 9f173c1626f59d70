//! Stay pricing and transaction references.

use rand::Rng;
use rand::distributions::Alphanumeric;

use hostel_core::types::DateRange;

/// Prefix of every generated transaction reference.
pub const TRANSACTION_PREFIX: &str = "TRANS_";

const TRANSACTION_SUFFIX_LEN: usize = 13;

/// Whole nights (partial days rounded up) times the nightly price.
pub fn stay_amount(range: &DateRange, nightly_price: f64) -> f64 {
    range.nights() as f64 * nightly_price
}

/// A fresh `TRANS_` reference with a lowercase alphanumeric suffix.
pub fn transaction_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TRANSACTION_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("{TRANSACTION_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_amount_is_nights_times_price() {
        let range = DateRange::new(
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(stay_amount(&range, 750.0), 2250.0);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let range = DateRange::new(
            Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(stay_amount(&range, 100.0), 200.0);
    }

    #[test]
    fn test_transaction_id_shape() {
        let id = transaction_id();
        let suffix = id.strip_prefix(TRANSACTION_PREFIX).unwrap();
        assert_eq!(suffix.len(), 13);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(transaction_id(), id);
    }
}
