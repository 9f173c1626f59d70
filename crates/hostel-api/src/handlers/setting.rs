//! Settings handlers.

use std::collections::BTreeMap;

use axum::extract::State;

use hostel_entity::setting::Setting;
use hostel_service::setting::UpsertSettingRequest;

use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, OptionalAuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/settings
pub async fn list_settings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<Setting>>> {
    Ok(ApiResponse::list(state.setting_service.list_settings(&auth).await?))
}

/// GET /api/settings/public
pub async fn public_settings(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<BTreeMap<String, serde_json::Value>>> {
    Ok(ApiResponse::ok(state.setting_service.public_settings().await?))
}

/// GET /api/settings/{key}
pub async fn get_setting(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    ApiPath(key): ApiPath<String>,
) -> ApiResult<ApiResponse<Setting>> {
    let setting = state
        .setting_service
        .get_setting(caller.actor(), &key.to_lowercase())
        .await?;
    Ok(ApiResponse::ok(setting))
}

/// PUT /api/settings/{key}
pub async fn upsert_setting(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(key): ApiPath<String>,
    ValidatedJson(req): ValidatedJson<UpsertSettingRequest>,
) -> ApiResult<ApiResponse<Setting>> {
    let setting = state
        .setting_service
        .upsert_setting(&auth, &key, req)
        .await?;
    Ok(ApiResponse::ok(setting))
}

/// DELETE /api/settings/{key}
pub async fn delete_setting(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(key): ApiPath<String>,
) -> ApiResult<ApiResponse<MessageResponse>> {
    state
        .setting_service
        .delete_setting(&auth, &key.to_lowercase())
        .await?;
    Ok(MessageResponse::new("Setting deleted"))
}

/// POST /api/settings/initialize
pub async fn initialize(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<CountResponse>> {
    let inserted = state.setting_service.initialize(&auth).await?;
    Ok(ApiResponse::ok(CountResponse {
        count: inserted as i64,
    }))
}
