//! Hostel handlers.

use axum::extract::State;
use uuid::Uuid;

use hostel_entity::hostel::Hostel;
use hostel_service::hostel::{CreateHostelRequest, HostelQuery, UpdateHostelRequest};

use crate::dto::response::{ApiResponse, Created, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{
    ApiPath, ApiQuery, AuthUser, OptionalAuthUser, PaginationParams, ValidatedJson,
};
use crate::state::AppState;

/// GET /api/hostels
pub async fn list_hostels(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    ApiQuery(query): ApiQuery<HostelQuery>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<Hostel>>> {
    let page = params.into_page_request(&state.config.pagination);
    let hostels = state
        .hostel_service
        .list_hostels(caller.actor(), query, page)
        .await?;
    Ok(ApiResponse::page(hostels))
}

/// POST /api/hostels
pub async fn create_hostel(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateHostelRequest>,
) -> ApiResult<Created<Hostel>> {
    Ok(Created(state.hostel_service.create_hostel(&auth, req).await?))
}

/// GET /api/hostels/owner
pub async fn owner_hostels(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<Hostel>>> {
    Ok(ApiResponse::list(state.hostel_service.owner_hostels(&auth).await?))
}

/// GET /api/hostels/{id}
pub async fn get_hostel(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<Hostel>> {
    let hostel = state.hostel_service.get_hostel(caller.actor(), id).await?;
    Ok(ApiResponse::ok(hostel))
}

/// PUT /api/hostels/{id}
pub async fn update_hostel(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateHostelRequest>,
) -> ApiResult<ApiResponse<Hostel>> {
    let hostel = state.hostel_service.update_hostel(&auth, id, req).await?;
    Ok(ApiResponse::ok(hostel))
}

/// PUT /api/hostels/{id}/verify
pub async fn verify_hostel(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<Hostel>> {
    Ok(ApiResponse::ok(state.hostel_service.verify_hostel(&auth, id).await?))
}

/// DELETE /api/hostels/{id}
pub async fn delete_hostel(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state.hostel_service.delete_hostel(&auth, id).await?;
    Ok(MessageResponse::new("Hostel deleted"))
}
