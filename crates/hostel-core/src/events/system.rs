//! System-level domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// System-level events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SystemEvent {
    /// An admin announcement addressed to every user.
    Announcement {
        /// The admin who sent it.
        admin_id: Uuid,
        /// Announcement title.
        title: String,
        /// Announcement body.
        message: String,
        /// Severity: `info`, `warning`, `success`, `error`.
        severity: String,
    },
}
