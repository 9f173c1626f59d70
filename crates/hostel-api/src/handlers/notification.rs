//! Notification handlers.

use axum::extract::State;
use uuid::Uuid;

use hostel_entity::notification::Notification;
use hostel_service::notification::AnnouncementRequest;

use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, ApiQuery, AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<Notification>>> {
    let page = params.into_page_request(&state.config.pagination);
    let result = state
        .notification_service
        .list_notifications(&auth, page)
        .await?;
    Ok(ApiResponse::page(result))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<CountResponse>> {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(ApiResponse::ok(CountResponse { count }))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<Notification>> {
    Ok(ApiResponse::ok(
        state.notification_service.mark_read(&auth, id).await?,
    ))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<CountResponse>> {
    let marked = state.notification_service.mark_all_read(&auth).await?;
    Ok(ApiResponse::ok(CountResponse {
        count: marked as i64,
    }))
}

/// DELETE /api/notifications/{id}
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state
        .notification_service
        .delete_notification(&auth, id)
        .await?;
    Ok(MessageResponse::new("Notification deleted"))
}

/// POST /api/notifications/announce
pub async fn announce(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<AnnouncementRequest>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state.notification_service.announce(&auth, req).await?;
    Ok(MessageResponse::new("Announcement sent"))
}
