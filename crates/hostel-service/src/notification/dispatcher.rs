//! Event publisher that delivers events as in-app notifications.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use hostel_core::events::{DomainEvent, EventPayload, SystemEvent};
use hostel_core::result::AppResult;
use hostel_core::traits::EventPublisher;
use hostel_database::repositories::notification::NotificationRepository;
use hostel_entity::notification::NotificationType;

use super::formatter;

/// Formats each event and writes the resulting notifications.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationDispatcher {
    /// Creates a new dispatcher.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }
}

#[async_trait]
impl EventPublisher for NotificationDispatcher {
    async fn publish(&self, event: DomainEvent) -> AppResult<()> {
        if let EventPayload::System(SystemEvent::Announcement {
            title,
            message,
            severity,
            ..
        }) = &event.payload
        {
            let notification_type = severity.parse().unwrap_or(NotificationType::Info);
            let recipients = self
                .notification_repo
                .broadcast_to_all(title, message, notification_type)
                .await?;
            info!(event_id = %event.id, recipients, "Announcement delivered");
            return Ok(());
        }

        for notification in formatter::notifications_for(&event) {
            self.notification_repo.create(&notification).await?;
        }
        debug!(event_id = %event.id, kind = event.kind(), "Event delivered");
        Ok(())
    }
}
