//! Hostel entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hostel listed by an owner.
///
/// `rating` and `num_reviews` are derived from the hostel's reviews and
/// are never written directly by callers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    /// Unique hostel identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// Hostel name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Street address.
    pub address: String,
    /// City, used for filtering.
    pub city: String,
    /// Advertised amenities.
    pub amenities: Vec<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
    /// Contact email address.
    pub contact_email: Option<String>,
    /// Whether an admin has verified the listing.
    pub is_verified: bool,
    /// The admin who verified the listing.
    pub verified_by: Option<Uuid>,
    /// Average review rating rounded to one decimal.
    pub rating: f64,
    /// Number of reviews.
    pub num_reviews: i32,
    /// When the hostel was created.
    pub created_at: DateTime<Utc>,
    /// When the hostel was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Hostel {
    /// Whether `user_id` owns this hostel.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Compact projection embedded in join views.
    pub fn summary(&self) -> HostelSummary {
        HostelSummary {
            id: self.id,
            name: self.name.clone(),
            city: self.city.clone(),
            owner_id: self.owner_id,
        }
    }
}

/// Identity of a hostel, embedded in views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelSummary {
    /// Hostel ID.
    pub id: Uuid,
    /// Hostel name.
    pub name: String,
    /// City.
    pub city: String,
    /// Owning user.
    pub owner_id: Uuid,
}

/// Data required to create a hostel.
#[derive(Debug, Clone)]
pub struct CreateHostel {
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub amenities: Vec<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

/// Partial update of a hostel. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateHostel {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}
