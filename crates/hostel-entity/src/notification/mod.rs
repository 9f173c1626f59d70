//! Notification entity.

pub mod kind;
pub mod model;

pub use kind::{NotificationType, RelatedModel};
pub use model::{CreateNotification, Notification};
