//! Review eligibility, one-review-per-hostel and rating recomputation.

use axum::http::StatusCode;

use hostel_entity::user::UserRole;

use crate::helpers::{TestApp, TestUser};

/// Book the room, have the owner confirm it and an admin complete it.
async fn complete_stay(app: &TestApp, owner: &TestUser, student: &TestUser, room_id: &str) {
    let booking = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "roomId": room_id,
                "checkInDate": "2027-07-01",
                "checkOutDate": "2027-07-04",
            })),
            Some(&student.token),
        )
        .await;
    assert_eq!(booking.status, StatusCode::CREATED, "{:?}", booking.body);
    let path = format!("/api/bookings/{}", booking.id());

    let confirmed = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "status": "confirmed" })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(confirmed.status, StatusCode::OK, "{:?}", confirmed.body);

    let admin = app.user("Admin", UserRole::Admin).await;
    let completed = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "status": "completed" })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(completed.status, StatusCode::OK, "{:?}", completed.body);
}

async fn rating_of(app: &TestApp, hostel_id: &str) -> (f64, i64) {
    let hostel = app
        .request("GET", &format!("/api/hostels/{hostel_id}"), None, None)
        .await;
    assert_eq!(hostel.status, StatusCode::OK, "{:?}", hostel.body);
    (
        hostel.body["data"]["rating"].as_f64().expect("rating"),
        hostel.body["data"]["numReviews"].as_i64().expect("numReviews"),
    )
}

fn review_body(hostel_id: &str, rating: i32) -> serde_json::Value {
    serde_json::json!({
        "hostelId": hostel_id,
        "rating": rating,
        "comment": "Clean rooms",
    })
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_second_review_conflicts_and_keeps_rating() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let (hostel_id, room_id) = app.verified_hostel_with_room(&owner, 450.0).await;
    let student = app.user("Student", UserRole::Student).await;
    complete_stay(&app, &owner, &student, &room_id).await;

    let first = app
        .request("POST", "/api/reviews", Some(review_body(&hostel_id, 4)), Some(&student.token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED, "{:?}", first.body);
    assert_eq!(first.body["data"]["rating"], 4);
    assert_eq!(rating_of(&app, &hostel_id).await, (4.0, 1));

    let second = app
        .request("POST", "/api/reviews", Some(review_body(&hostel_id, 2)), Some(&student.token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT, "{:?}", second.body);
    assert_eq!(rating_of(&app, &hostel_id).await, (4.0, 1));
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_deleting_last_review_resets_rating() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let (hostel_id, room_id) = app.verified_hostel_with_room(&owner, 450.0).await;
    let student = app.user("Student", UserRole::Student).await;
    complete_stay(&app, &owner, &student, &room_id).await;

    let review = app
        .request("POST", "/api/reviews", Some(review_body(&hostel_id, 5)), Some(&student.token))
        .await;
    assert_eq!(review.status, StatusCode::CREATED, "{:?}", review.body);
    assert_eq!(rating_of(&app, &hostel_id).await, (5.0, 1));

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/reviews/{}", review.id()),
            None,
            Some(&student.token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK, "{:?}", deleted.body);
    assert_eq!(rating_of(&app, &hostel_id).await, (0.0, 0));
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_review_requires_completed_stay() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let (hostel_id, room_id) = app.verified_hostel_with_room(&owner, 450.0).await;
    let student = app.user("Student", UserRole::Student).await;

    let never_stayed = app
        .request("POST", "/api/reviews", Some(review_body(&hostel_id, 3)), Some(&student.token))
        .await;
    assert_eq!(never_stayed.status, StatusCode::FORBIDDEN);

    // A pending booking is not a stay.
    let booking = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "roomId": room_id,
                "checkInDate": "2027-08-01",
                "checkOutDate": "2027-08-03",
            })),
            Some(&student.token),
        )
        .await;
    assert_eq!(booking.status, StatusCode::CREATED, "{:?}", booking.body);

    let pending = app
        .request("POST", "/api/reviews", Some(review_body(&hostel_id, 3)), Some(&student.token))
        .await;
    assert_eq!(pending.status, StatusCode::FORBIDDEN);
    assert_eq!(pending.body["error"], "FORBIDDEN");
    assert_eq!(rating_of(&app, &hostel_id).await, (0.0, 0));
}
