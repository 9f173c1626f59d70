//! Room handlers.

use axum::extract::State;
use uuid::Uuid;

use hostel_entity::room::{Room, RoomView};
use hostel_entity::user::User;
use hostel_service::room::{AllocateRoomRequest, CreateRoomRequest, RoomQuery, UpdateRoomRequest};

use crate::dto::response::{ApiResponse, Created, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{
    ApiPath, ApiQuery, AuthUser, OptionalAuthUser, PaginationParams, ValidatedJson,
};
use crate::state::AppState;

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    ApiQuery(query): ApiQuery<RoomQuery>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<RoomView>>> {
    let page = params.into_room_page_request(&state.config.pagination);
    let rooms = state
        .room_service
        .list_rooms(caller.actor(), query, page)
        .await?;
    Ok(ApiResponse::page(rooms))
}

/// GET /api/hostels/{id}/rooms
pub async fn hostel_rooms(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    ApiPath(hostel_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<RoomView>>> {
    let page = params.into_room_page_request(&state.config.pagination);
    let rooms = state
        .room_service
        .hostel_rooms(caller.actor(), hostel_id, page)
        .await?;
    Ok(ApiResponse::page(rooms))
}

/// POST /api/hostels/{id}/rooms
pub async fn create_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(hostel_id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<Created<Room>> {
    let room = state.room_service.create_room(&auth, hostel_id, req).await?;
    Ok(Created(room))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<RoomView>> {
    Ok(ApiResponse::ok(state.room_service.get_room(caller.actor(), id).await?))
}

/// PUT /api/rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateRoomRequest>,
) -> ApiResult<ApiResponse<Room>> {
    Ok(ApiResponse::ok(state.room_service.update_room(&auth, id, req).await?))
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state.room_service.delete_room(&auth, id).await?;
    Ok(MessageResponse::new("Room deleted"))
}

/// POST /api/rooms/{id}/allocate
pub async fn allocate_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<AllocateRoomRequest>,
) -> ApiResult<ApiResponse<User>> {
    let student = state.room_service.allocate_room(&auth, id, req).await?;
    Ok(ApiResponse::ok(student))
}
