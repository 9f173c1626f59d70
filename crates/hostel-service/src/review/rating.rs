//! Hostel rating aggregation.

/// The derived rating columns of a hostel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal, `0.0` without reviews.
    pub rating: f64,
    pub num_reviews: i32,
}

impl RatingSummary {
    pub fn from_ratings(ratings: &[i32]) -> Self {
        if ratings.is_empty() {
            return Self {
                rating: 0.0,
                num_reviews: 0,
            };
        }
        let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
        let mean = sum as f64 / ratings.len() as f64;
        Self {
            rating: (mean * 10.0).round() / 10.0,
            num_reviews: ratings.len() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_reviews() {
        assert_eq!(
            RatingSummary::from_ratings(&[]),
            RatingSummary {
                rating: 0.0,
                num_reviews: 0
            }
        );
    }

    #[test]
    fn test_single_review() {
        let summary = RatingSummary::from_ratings(&[4]);
        assert_eq!(summary.rating, 4.0);
        assert_eq!(summary.num_reviews, 1);
    }

    #[test]
    fn test_mean_rounds_to_one_decimal() {
        assert_eq!(RatingSummary::from_ratings(&[5, 4, 4]).rating, 4.3);
        assert_eq!(RatingSummary::from_ratings(&[5, 4]).rating, 4.5);
        assert_eq!(RatingSummary::from_ratings(&[1, 2, 2]).rating, 1.7);
    }
}
