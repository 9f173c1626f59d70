//! Booking entity model and joined view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use hostel_core::types::DateRange;

use super::status::BookingStatus;
use crate::hostel::HostelSummary;
use crate::room::RoomSummary;
use crate::user::UserSummary;

/// A reservation of a room for a half-open date interval.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The booked room.
    pub room_id: Uuid,
    /// The user who requested the booking.
    pub user_id: Uuid,
    /// First night of the stay.
    pub check_in_date: DateTime<Utc>,
    /// Departure; the stay covers `[check_in_date, check_out_date)`.
    pub check_out_date: DateTime<Utc>,
    /// Current status.
    pub status: BookingStatus,
    /// Free-form requests from the guest.
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// The stay interval. `None` only for rows violating the date check.
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.check_in_date, self.check_out_date)
    }

    /// Whether `user_id` created this booking.
    pub fn is_created_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// A booking joined with its room, hostel, and guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub room: RoomSummary,
    pub hostel: HostelSummary,
    pub guest: UserSummary,
}

/// Data required to persist a new booking.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub range: DateRange,
    pub notes: Option<String>,
}
