//! Complaint handlers.

use axum::extract::State;
use uuid::Uuid;

use hostel_entity::complaint::{CommentView, ComplaintStatus, ComplaintView};
use hostel_service::complaint::{
    AssignComplaintRequest, ComplaintExportRow, ComplaintQuery, ComplaintStats,
    CreateCommentRequest, CreateComplaintRequest, ExportQuery, UpdateComplaintRequest,
};

use crate::dto::request::BlockQuery;
use crate::dto::response::{ApiResponse, Created, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, ApiQuery, AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/complaints
pub async fn create_complaint(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateComplaintRequest>,
) -> ApiResult<Created<ComplaintView>> {
    Ok(Created(
        state.complaint_service.create_complaint(&auth, req).await?,
    ))
}

/// GET /api/complaints
pub async fn list_complaints(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<ComplaintQuery>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<ComplaintView>>> {
    let page = params.into_page_request(&state.config.pagination);
    let complaints = state
        .complaint_service
        .list_complaints(&auth, query, page)
        .await?;
    Ok(ApiResponse::page(complaints))
}

/// GET /api/complaints/me
pub async fn my_complaints(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<ComplaintView>>> {
    Ok(ApiResponse::list(
        state.complaint_service.my_complaints(&auth).await?,
    ))
}

/// GET /api/complaints/status/{status}
pub async fn complaints_by_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(status): ApiPath<ComplaintStatus>,
) -> ApiResult<ApiResponse<Vec<ComplaintView>>> {
    Ok(ApiResponse::list(
        state
            .complaint_service
            .complaints_by_status(&auth, status)
            .await?,
    ))
}

/// GET /api/complaints/room/{block}/{room}
pub async fn complaints_by_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath((block, room_number)): ApiPath<(String, String)>,
) -> ApiResult<ApiResponse<Vec<ComplaintView>>> {
    Ok(ApiResponse::list(
        state
            .complaint_service
            .complaints_by_room(&auth, &block, &room_number)
            .await?,
    ))
}

/// GET /api/complaints/stats
pub async fn complaint_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<BlockQuery>,
) -> ApiResult<ApiResponse<ComplaintStats>> {
    Ok(ApiResponse::ok(
        state
            .complaint_service
            .complaint_stats(&auth, query.block)
            .await?,
    ))
}

/// GET /api/complaints/export
pub async fn export_complaints(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<ExportQuery>,
) -> ApiResult<ApiResponse<Vec<ComplaintExportRow>>> {
    Ok(ApiResponse::list(
        state
            .complaint_service
            .export_complaints(&auth, query)
            .await?,
    ))
}

/// GET /api/complaints/{id}
pub async fn get_complaint(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<ComplaintView>> {
    Ok(ApiResponse::ok(
        state.complaint_service.get_complaint(&auth, id).await?,
    ))
}

/// PUT /api/complaints/{id}
pub async fn update_complaint(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateComplaintRequest>,
) -> ApiResult<ApiResponse<ComplaintView>> {
    Ok(ApiResponse::ok(
        state
            .complaint_service
            .update_complaint(&auth, id, req)
            .await?,
    ))
}

/// PUT /api/complaints/{id}/assign
pub async fn assign_complaint(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<AssignComplaintRequest>,
) -> ApiResult<ApiResponse<ComplaintView>> {
    Ok(ApiResponse::ok(
        state
            .complaint_service
            .assign_complaint(&auth, id, req)
            .await?,
    ))
}

/// DELETE /api/complaints/{id}
pub async fn delete_complaint(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state.complaint_service.delete_complaint(&auth, id).await?;
    Ok(MessageResponse::new("Complaint deleted"))
}

/// POST /api/complaints/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<CommentView>> {
    Ok(Created(
        state.complaint_service.add_comment(&auth, id, req).await?,
    ))
}

/// DELETE /api/complaints/{id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath((id, comment_id)): ApiPath<(Uuid, Uuid)>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state
        .complaint_service
        .delete_comment(&auth, id, comment_id)
        .await?;
    Ok(MessageResponse::new("Comment deleted"))
}
