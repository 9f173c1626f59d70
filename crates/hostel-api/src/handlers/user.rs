//! Admin user management handlers.

use axum::extract::State;

use hostel_entity::user::User;
use hostel_service::user::{CreateUserRequest, UserQuery};

use crate::dto::response::{ApiResponse, Created};
use crate::error::ApiResult;
use crate::extractors::{ApiQuery, AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<UserQuery>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<User>>> {
    let page = params.into_page_request(&state.config.pagination);
    let users = state.admin_user_service.list_users(&auth, query, page).await?;
    Ok(ApiResponse::page(users))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<User>> {
    let user = state.admin_user_service.create_user(&auth, req).await?;
    Ok(Created(user))
}
