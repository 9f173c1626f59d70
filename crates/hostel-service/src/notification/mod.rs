//! Notifications: event formatting, delivery and the inbox.

pub mod dispatcher;
pub mod formatter;
pub mod service;

pub use dispatcher::NotificationDispatcher;
pub use service::{AnnouncementRequest, NotificationService};
