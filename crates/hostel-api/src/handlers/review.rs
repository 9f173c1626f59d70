//! Review handlers.

use axum::extract::State;
use uuid::Uuid;

use hostel_entity::review::ReviewView;
use hostel_service::review::{CreateReviewRequest, UpdateReviewRequest};

use crate::dto::response::{ApiResponse, Created, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, ApiQuery, AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<ReviewView>> {
    Ok(Created(state.review_service.create_review(&auth, req).await?))
}

/// GET /api/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<ReviewView>>> {
    let page = params.into_page_request(&state.config.pagination);
    Ok(ApiResponse::page(
        state.review_service.list_reviews(&auth, page).await?,
    ))
}

/// GET /api/reviews/me
pub async fn my_reviews(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<ReviewView>>> {
    Ok(ApiResponse::list(state.review_service.my_reviews(&auth).await?))
}

/// GET /api/reviews/owner
pub async fn owner_reviews(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<ReviewView>>> {
    Ok(ApiResponse::list(state.review_service.owner_reviews(&auth).await?))
}

/// GET /api/reviews/hostel/{id}
pub async fn hostel_reviews(
    State(state): State<AppState>,
    ApiPath(hostel_id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<Vec<ReviewView>>> {
    Ok(ApiResponse::list(
        state.review_service.hostel_reviews(hostel_id).await?,
    ))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<ReviewView>> {
    Ok(ApiResponse::ok(state.review_service.get_review(id).await?))
}

/// PUT /api/reviews/{id}
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<ApiResponse<ReviewView>> {
    Ok(ApiResponse::ok(
        state.review_service.update_review(&auth, id, req).await?,
    ))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state.review_service.delete_review(&auth, id).await?;
    Ok(MessageResponse::new("Review deleted"))
}
