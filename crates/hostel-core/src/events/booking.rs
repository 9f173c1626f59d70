//! Booking and payment domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BookingEvent {
    /// A booking moved to a new status.
    StatusChanged {
        /// The booking ID.
        booking_id: Uuid,
        /// The user who created the booking.
        user_id: Uuid,
        /// Status before the change.
        from: String,
        /// Status after the change.
        to: String,
    },
}

/// Payment events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PaymentEvent {
    /// A payment was recorded against a booking.
    Received {
        /// The payment ID.
        payment_id: Uuid,
        /// The booking paid for.
        booking_id: Uuid,
        /// The paying user.
        user_id: Uuid,
        /// Amount charged.
        amount: f64,
        /// Generated transaction reference.
        transaction_id: String,
    },
}
