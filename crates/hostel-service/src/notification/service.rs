//! Notification inbox and announcements.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use hostel_auth::policy;
use hostel_core::error::AppError;
use hostel_core::events::{DomainEvent, SystemEvent};
use hostel_core::result::AppResult;
use hostel_core::traits::EventPublisher;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_database::repositories::notification::NotificationRepository;
use hostel_entity::notification::{Notification, NotificationType};

use crate::context::RequestContext;

/// Admin announcement to every user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnnouncementRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub message: String,
    #[serde(default, rename = "type")]
    pub notification_type: NotificationType,
}

/// Manages the caller's notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
    /// Outbound events.
    publisher: Arc<dyn EventPublisher>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        notification_repo: Arc<NotificationRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            notification_repo,
            publisher,
        }
    }

    /// Lists notifications for the current user.
    pub async fn list_notifications(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notification_repo
            .find_by_recipient(ctx.user_id(), &page)
            .await
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notification_repo.count_unread(ctx.user_id()).await
    }

    /// Marks a notification as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> AppResult<Notification> {
        self.notification_repo
            .mark_read(notification_id, ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))
    }

    /// Marks all notifications as read for the current user.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.notification_repo.mark_all_read(ctx.user_id()).await
    }

    /// Deletes one of the caller's notifications.
    pub async fn delete_notification(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> AppResult<()> {
        if !self
            .notification_repo
            .delete(notification_id, ctx.user_id())
            .await?
        {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Sends an announcement to every user. Admin only.
    pub async fn announce(&self, ctx: &RequestContext, req: AnnouncementRequest) -> AppResult<()> {
        policy::admin_only(&ctx.actor).into_result()?;
        info!(actor_id = %ctx.user_id(), title = %req.title, "Announcement sent");

        let event = SystemEvent::Announcement {
            admin_id: ctx.user_id(),
            title: req.title,
            message: req.message,
            severity: req.notification_type.to_string(),
        };
        self.publisher
            .publish(DomainEvent::new(Some(ctx.user_id()), event.into()))
            .await
    }
}
