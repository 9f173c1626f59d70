//! Booking handlers.

use axum::extract::State;
use uuid::Uuid;

use hostel_entity::booking::BookingView;
use hostel_service::booking::CreateBookingRequest;

use crate::dto::request::BookingStatusUpdate;
use crate::dto::response::{ApiResponse, Created, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, ApiQuery, AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<Created<BookingView>> {
    Ok(Created(state.booking_service.create_booking(&auth, req).await?))
}

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<BookingView>>> {
    let page = params.into_page_request(&state.config.pagination);
    Ok(ApiResponse::page(
        state.booking_service.list_bookings(&auth, page).await?,
    ))
}

/// GET /api/bookings/me
pub async fn my_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<BookingView>>> {
    Ok(ApiResponse::list(state.booking_service.my_bookings(&auth).await?))
}

/// GET /api/bookings/owner
pub async fn owner_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<BookingView>>> {
    Ok(ApiResponse::list(
        state.booking_service.owner_bookings(&auth).await?,
    ))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<BookingView>> {
    Ok(ApiResponse::ok(state.booking_service.get_booking(&auth, id).await?))
}

/// PUT /api/bookings/{id}
pub async fn update_booking_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<BookingStatusUpdate>,
) -> ApiResult<ApiResponse<BookingView>> {
    let booking = state
        .booking_service
        .update_status(&auth, id, req.status)
        .await?;
    Ok(ApiResponse::ok(booking))
}

/// DELETE /api/bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state.booking_service.delete_booking(&auth, id).await?;
    Ok(MessageResponse::new("Booking deleted"))
}
