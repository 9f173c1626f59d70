//! HTTP surface tests that never reach the database.

use axum::http::StatusCode;

use hostel_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_is_live() {
    let app = TestApp::offline().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::offline().await;

    let response = app.request("GET", "/api/bookings/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::offline().await;

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_on_public_route_rejected() {
    let app = TestApp::offline().await;

    let response = app
        .request("GET", "/api/hostels", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_validates_email() {
    let app = TestApp::offline().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "not-an-email", "password": "x" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["errors"].is_array());
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = TestApp::offline().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "name": "Ann" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_uuid_path_is_validation_error() {
    let app = TestApp::offline().await;

    let response = app
        .request("GET", "/api/hostels/not-a-uuid", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::offline().await;

    let response = app.request("GET", "/api/nowhere", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owner_listings_reject_admins() {
    let app = TestApp::offline().await;
    let token = TestApp::offline_token(UserRole::Admin);

    for path in [
        "/api/hostels/owner",
        "/api/bookings/owner",
        "/api/payments/owner",
        "/api/reviews/owner",
    ] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        assert_eq!(response.body["error"], "FORBIDDEN");
    }
}
