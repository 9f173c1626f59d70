//! Request DTOs owned by the HTTP layer. Domain requests live next to
//! their services.

use serde::{Deserialize, Serialize};
use validator::Validate;

use hostel_entity::booking::BookingStatus;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Booking status change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingStatusUpdate {
    /// Target status.
    pub status: BookingStatus,
}

/// Optional block filter for statistics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockQuery {
    pub block: Option<String>,
}
