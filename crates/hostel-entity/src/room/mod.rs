//! Room entity and its enumerations.

pub mod kind;
pub mod model;

pub use kind::{GenderPreference, RoomType};
pub use model::{CreateRoom, Room, RoomSummary, RoomView, UpdateRoom};
