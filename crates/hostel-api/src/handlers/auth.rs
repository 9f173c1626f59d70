//! Registration, login and self-service handlers.

use axum::extract::State;

use hostel_auth::LoginResult;
use hostel_entity::user::User;
use hostel_service::user::{ChangePasswordRequest, RegisterRequest, UpdateProfileRequest};

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, Created, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<LoginResult>> {
    let result = state.user_service.register(req).await?;
    Ok(Created(result))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiResponse<LoginResult>> {
    let result = state.authenticator.login(&req.email, &req.password).await?;
    Ok(ApiResponse::ok(result))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<ApiResponse<User>> {
    Ok(ApiResponse::ok(state.user_service.me(&auth).await?))
}

/// PUT /api/auth/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<ApiResponse<User>> {
    let user = state.user_service.update_profile(&auth, req).await?;
    Ok(ApiResponse::ok(user))
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state.user_service.change_password(&auth, req).await?;
    Ok(MessageResponse::new("Password changed"))
}
