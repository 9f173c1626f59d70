//! Payment entity model and joined view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{PaymentMethod, PaymentStatus};
use crate::booking::BookingStatus;
use crate::hostel::HostelSummary;
use crate::user::UserSummary;

/// A payment recorded against exactly one booking.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique payment identifier.
    pub id: Uuid,
    /// The booking paid for. Unique across payments.
    pub booking_id: Uuid,
    /// The paying user (the booking's creator).
    pub user_id: Uuid,
    /// Nights × nightly price.
    pub amount: f64,
    pub payment_method: PaymentMethod,
    /// Generated reference, `TRANS_` followed by 13 alphanumerics.
    pub transaction_id: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// A payment joined with its booking, room, hostel, and payer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentView {
    #[serde(flatten)]
    pub payment: Payment,
    pub booking_status: BookingStatus,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub room_number: String,
    pub hostel: HostelSummary,
    pub payer: UserSummary,
}

/// Data required to persist a payment.
#[derive(Debug, Clone)]
pub struct CreatePayment {
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub transaction_id: String,
    pub status: PaymentStatus,
}
