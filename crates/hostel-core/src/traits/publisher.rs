//! Outbound event publisher.

use async_trait::async_trait;
use tracing::warn;

use crate::events::DomainEvent;
use crate::result::AppResult;

/// Sink for domain events produced by the engines.
///
/// Publishing is best-effort from the caller's point of view: the write
/// that produced the event has already happened and is never undone.
#[async_trait]
pub trait EventPublisher: Send + Sync + std::fmt::Debug + 'static {
    /// Enqueue or deliver a single event.
    async fn publish(&self, event: DomainEvent) -> AppResult<()>;

    /// Publish and swallow any failure after logging it.
    async fn publish_or_log(&self, event: DomainEvent) {
        let event_id = event.id;
        let kind = event.kind();
        if let Err(e) = self.publish(event).await {
            warn!(event_id = %event_id, kind, error = %e, "Failed to publish event");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use uuid::Uuid;

    use super::*;
    use crate::error::AppError;
    use crate::events::{EventPayload, SystemEvent};

    #[derive(Debug, Default)]
    struct FailingPublisher {
        attempts: Mutex<u32>,
    }

    #[async_trait]
    impl EventPublisher for FailingPublisher {
        async fn publish(&self, _event: DomainEvent) -> AppResult<()> {
            *self.attempts.lock().unwrap() += 1;
            Err(AppError::database("notifications table unavailable"))
        }
    }

    #[tokio::test]
    async fn test_publish_or_log_swallows_failures() {
        let publisher = FailingPublisher::default();
        let event = DomainEvent::new(
            None,
            EventPayload::System(SystemEvent::Announcement {
                admin_id: Uuid::new_v4(),
                title: "Water outage".into(),
                message: "Block A, 2pm-4pm".into(),
                severity: "warning".into(),
            }),
        );
        publisher.publish_or_log(event).await;
        assert_eq!(*publisher.attempts.lock().unwrap(), 1);
    }
}
