//! Dashboard handlers.

use axum::extract::State;

use hostel_service::dashboard::{AdminDashboard, HostelDashboard, StudentDashboard};

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn admin_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<AdminDashboard>> {
    Ok(ApiResponse::ok(state.dashboard_service.admin_stats(&auth).await?))
}

/// GET /api/dashboard/student-stats
pub async fn student_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<StudentDashboard>> {
    Ok(ApiResponse::ok(
        state.dashboard_service.student_stats(&auth).await?,
    ))
}

/// GET /api/dashboard/hostel-stats
pub async fn hostel_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<HostelDashboard>> {
    Ok(ApiResponse::ok(state.dashboard_service.hostel_stats(&auth).await?))
}
