//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::{GenderPreference, RoomType};
use crate::hostel::HostelSummary;

/// A bookable room inside a hostel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// The hostel containing this room.
    pub hostel_id: Uuid,
    /// Room number, unique within the hostel.
    pub room_number: String,
    /// Room layout.
    pub room_type: RoomType,
    /// Block or wing of the hostel.
    pub block: String,
    /// Price per night.
    pub price: f64,
    /// Number of beds.
    pub capacity: i32,
    /// Room amenities.
    pub amenities: Vec<String>,
    /// Who the room is offered to.
    pub gender_preference: GenderPreference,
    /// Whether the room accepts new bookings.
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Compact projection embedded in join views.
    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            id: self.id,
            room_number: self.room_number.clone(),
            room_type: self.room_type,
            block: self.block.clone(),
            price: self.price,
        }
    }
}

/// Identity and price of a room, embedded in views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: Uuid,
    pub room_number: String,
    pub room_type: RoomType,
    pub block: String,
    pub price: f64,
}

/// A room together with its hostel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    #[serde(flatten)]
    pub room: Room,
    pub hostel: HostelSummary,
    /// Whether the parent hostel is verified.
    pub hostel_verified: bool,
}

/// Data required to create a room.
#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub hostel_id: Uuid,
    pub room_number: String,
    pub room_type: RoomType,
    pub block: String,
    pub price: f64,
    pub capacity: i32,
    pub amenities: Vec<String>,
    pub gender_preference: GenderPreference,
    pub is_available: bool,
}

/// Partial update of a room. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoom {
    pub room_number: Option<String>,
    pub room_type: Option<RoomType>,
    pub block: Option<String>,
    pub price: Option<f64>,
    pub capacity: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub gender_preference: Option<GenderPreference>,
    pub is_available: Option<bool>,
}
