//! Complaint workflow events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Complaint workflow events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ComplaintEvent {
    /// The complaint status changed.
    StatusChanged {
        /// The complaint ID.
        complaint_id: Uuid,
        /// The student who filed it.
        student_id: Uuid,
        /// Complaint title.
        title: String,
        /// New status.
        status: String,
    },
    /// A staff member was assigned.
    Assigned {
        /// The complaint ID.
        complaint_id: Uuid,
        /// The student who filed it.
        student_id: Uuid,
        /// The assigned staff member.
        staff_id: Uuid,
        /// Complaint title.
        title: String,
    },
}
