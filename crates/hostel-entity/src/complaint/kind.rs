//! Complaint category and priority.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complaint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "complaint_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComplaintType {
    Maintenance,
    Plumbing,
    Electrical,
    Furniture,
    Cleanliness,
    Security,
    Internet,
    Roommate,
    Noise,
    Mess,
    Other,
}

impl ComplaintType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Plumbing => "plumbing",
            Self::Electrical => "electrical",
            Self::Furniture => "furniture",
            Self::Cleanliness => "cleanliness",
            Self::Security => "security",
            Self::Internet => "internet",
            Self::Roommate => "roommate",
            Self::Noise => "noise",
            Self::Mess => "mess",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complaint urgency. Defaults to `medium`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "complaint_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComplaintPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl ComplaintPriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for ComplaintPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
