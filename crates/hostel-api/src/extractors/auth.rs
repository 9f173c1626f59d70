//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, validates it, and injects a request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use hostel_auth::policy::Actor;
use hostel_core::error::AppError;
use hostel_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthorized("Not authorized to access this route"))?;

        let claims = state.jwt_decoder.decode(bearer.token())?;

        Ok(AuthUser(RequestContext::new(
            claims.user_id(),
            claims.role,
            claims.name,
            client_ip(parts),
            user_agent(parts),
        )))
    }
}

/// Caller identity for public routes whose results depend on who asks.
///
/// Absent credentials yield `None`; present but invalid credentials are
/// rejected like on authenticated routes.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<RequestContext>);

impl OptionalAuthUser {
    /// The caller, if any.
    pub fn actor(&self) -> Option<&Actor> {
        self.0.as_ref().map(|ctx| &ctx.actor)
    }
}

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(axum::http::header::AUTHORIZATION) {
            return Ok(OptionalAuthUser(None));
        }
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;
        Ok(OptionalAuthUser(Some(ctx)))
    }
}

fn client_ip(parts: &Parts) -> String {
    parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn user_agent(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    #[test]
    fn test_client_ip_takes_first_forwarded_hop() {
        let (parts, _) = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(client_ip(&parts), "203.0.113.7");
    }

    #[test]
    fn test_client_ip_unknown_without_header() {
        let (parts, _) = Request::builder().body(()).unwrap().into_parts();
        assert_eq!(client_ip(&parts), "unknown");
        assert!(user_agent(&parts).is_none());
    }
}
