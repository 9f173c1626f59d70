//! Room events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Room events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoomEvent {
    /// A student was allocated to a room.
    Allocated {
        /// The room ID.
        room_id: Uuid,
        /// The allocated student.
        student_id: Uuid,
        /// Room number.
        room_number: String,
        /// Block the room is in.
        block: String,
    },
}
