//! Reviews and the hostel rating derived from them.

pub mod rating;
pub mod service;

pub use rating::RatingSummary;
pub use service::{CreateReviewRequest, ReviewService, UpdateReviewRequest};
