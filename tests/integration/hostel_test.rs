//! Hostel registration, verification visibility and room inventory.

use axum::http::StatusCode;

use hostel_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_unverified_hostel_hidden_from_public() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;

    let created = app
        .request(
            "POST",
            "/api/hostels",
            Some(serde_json::json!({
                "name": "Riverside",
                "address": "2 River Lane",
                "city": "Nagpur",
            })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["isVerified"], false);
    let id = created.id();

    let anonymous = app
        .request("GET", &format!("/api/hostels/{id}"), None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::FORBIDDEN);

    let by_owner = app
        .request("GET", &format!("/api/hostels/{id}"), None, Some(&owner.token))
        .await;
    assert_eq!(by_owner.status, StatusCode::OK);

    let admin = app.user("Admin", UserRole::Admin).await;
    let verified = app
        .request(
            "PUT",
            &format!("/api/hostels/{id}/verify"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(verified.status, StatusCode::OK);
    assert_eq!(verified.body["data"]["isVerified"], true);

    let anonymous = app
        .request("GET", &format!("/api/hostels/{id}"), None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_students_cannot_register_hostels() {
    let app = TestApp::connect().await;
    let student = app.user("Student", UserRole::Student).await;

    let response = app
        .request(
            "POST",
            "/api/hostels",
            Some(serde_json::json!({
                "name": "Nope",
                "address": "3 Side Street",
                "city": "Pune",
            })),
            Some(&student.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_only_owner_manages_rooms() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let rival = app.user("Rival", UserRole::Owner).await;
    let (hostel_id, room_id) = app.verified_hostel_with_room(&owner, 400.0).await;

    let update = app
        .request(
            "PUT",
            &format!("/api/rooms/{room_id}"),
            Some(serde_json::json!({ "price": 1.0 })),
            Some(&rival.token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let rooms = app
        .request("GET", &format!("/api/hostels/{hostel_id}/rooms"), None, None)
        .await;
    assert_eq!(rooms.status, StatusCode::OK);
    assert_eq!(rooms.body["count"], 1);
    assert_eq!(rooms.body["data"][0]["price"], 400.0);
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_register_and_me() {
    let app = TestApp::connect().await;
    let email = format!("new-{}@test.com", uuid::Uuid::new_v4().simple());

    let registered = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "New Student",
                "email": email,
                "password": "secret123",
            })),
            None,
        )
        .await;
    assert_eq!(registered.status, StatusCode::CREATED, "{:?}", registered.body);
    assert_eq!(registered.body["data"]["user"]["role"], "student");
    assert!(registered.body["data"]["user"].get("passwordHash").is_none());

    let duplicate = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Again",
                "email": email,
                "password": "secret123",
            })),
            None,
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let token = app.login(&email, "secret123").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], email.as_str());
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_listing_filters_by_verification() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let admin = app.user("Admin", UserRole::Admin).await;
    let city = format!("City{}", uuid::Uuid::new_v4().simple());

    let created = app
        .request(
            "POST",
            "/api/hostels",
            Some(serde_json::json!({
                "name": "Pending Place",
                "address": "4 Queue Road",
                "city": city,
            })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.id();

    let unverified = app
        .request(
            "GET",
            &format!("/api/hostels?city={city}&verified=false"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(unverified.status, StatusCode::OK);
    assert_eq!(unverified.body["count"], 1);
    assert_eq!(unverified.body["data"][0]["id"], id.as_str());

    let verified = app
        .request(
            "GET",
            &format!("/api/hostels?city={city}&verified=true"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(verified.body["count"], 0);

    let anonymous = app
        .request(
            "GET",
            &format!("/api/hostels?city={city}&verified=false"),
            None,
            None,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(anonymous.body["count"], 0);
}
