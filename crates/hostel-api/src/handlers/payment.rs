//! Payment handlers.

use axum::extract::State;
use uuid::Uuid;

use hostel_entity::payment::PaymentView;
use hostel_service::payment::CreatePaymentRequest;

use crate::dto::response::{ApiResponse, Created};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, ApiQuery, AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/payments
pub async fn create_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePaymentRequest>,
) -> ApiResult<Created<PaymentView>> {
    Ok(Created(state.payment_service.create_payment(&auth, req).await?))
}

/// GET /api/payments
pub async fn list_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> ApiResult<ApiResponse<Vec<PaymentView>>> {
    let page = params.into_page_request(&state.config.pagination);
    Ok(ApiResponse::page(
        state.payment_service.list_payments(&auth, page).await?,
    ))
}

/// GET /api/payments/me
pub async fn my_payments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<PaymentView>>> {
    Ok(ApiResponse::list(state.payment_service.my_payments(&auth).await?))
}

/// GET /api/payments/owner
pub async fn owner_payments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<PaymentView>>> {
    Ok(ApiResponse::list(
        state.payment_service.owner_payments(&auth).await?,
    ))
}

/// GET /api/payments/{id}
pub async fn get_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<ApiResponse<PaymentView>> {
    Ok(ApiResponse::ok(state.payment_service.get_payment(&auth, id).await?))
}
