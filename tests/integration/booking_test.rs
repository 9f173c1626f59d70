//! Booking overlap, lifecycle and payment flow.

use axum::http::StatusCode;

use hostel_entity::user::UserRole;

use crate::helpers::{TestApp, TestUser};

async fn book(app: &TestApp, student: &TestUser, room_id: &str, from: &str, to: &str) -> crate::helpers::TestResponse {
    app.request(
        "POST",
        "/api/bookings",
        Some(serde_json::json!({
            "roomId": room_id,
            "checkInDate": from,
            "checkOutDate": to,
        })),
        Some(&student.token),
    )
    .await
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_overlapping_booking_conflicts() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let (_, room_id) = app.verified_hostel_with_room(&owner, 500.0).await;
    let first = app.user("First", UserRole::Student).await;
    let second = app.user("Second", UserRole::Student).await;

    let booked = book(&app, &first, &room_id, "2027-03-01", "2027-03-05").await;
    assert_eq!(booked.status, StatusCode::CREATED, "{:?}", booked.body);
    assert_eq!(booked.body["data"]["status"], "pending");

    let overlap = book(&app, &second, &room_id, "2027-03-04", "2027-03-08").await;
    assert_eq!(overlap.status, StatusCode::CONFLICT);

    // Check-out day is free for the next guest.
    let adjacent = book(&app, &second, &room_id, "2027-03-05", "2027-03-08").await;
    assert_eq!(adjacent.status, StatusCode::CREATED, "{:?}", adjacent.body);
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_reversed_dates_rejected() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let (_, room_id) = app.verified_hostel_with_room(&owner, 500.0).await;
    let student = app.user("Student", UserRole::Student).await;

    let response = book(&app, &student, &room_id, "2027-04-05", "2027-04-01").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_payment_confirms_booking() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let (_, room_id) = app.verified_hostel_with_room(&owner, 500.0).await;
    let student = app.user("Student", UserRole::Student).await;

    let booking_id = book(&app, &student, &room_id, "2027-05-01", "2027-05-04")
        .await
        .id();

    let paid = app
        .request(
            "POST",
            "/api/payments",
            Some(serde_json::json!({
                "bookingId": booking_id,
                "paymentMethod": "upi",
            })),
            Some(&student.token),
        )
        .await;
    assert_eq!(paid.status, StatusCode::CREATED, "{:?}", paid.body);
    assert_eq!(paid.body["data"]["amount"], 1500.0);
    assert_eq!(paid.body["data"]["status"], "completed");
    assert!(
        paid.body["data"]["transactionId"]
            .as_str()
            .is_some_and(|t| t.starts_with("TRANS_"))
    );

    let booking = app
        .request(
            "GET",
            &format!("/api/bookings/{booking_id}"),
            None,
            Some(&student.token),
        )
        .await;
    assert_eq!(booking.body["data"]["status"], "confirmed");

    let again = app
        .request(
            "POST",
            "/api/payments",
            Some(serde_json::json!({
                "bookingId": booking_id,
                "paymentMethod": "cash",
            })),
            Some(&student.token),
        )
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_status_changes_follow_roles() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let (_, room_id) = app.verified_hostel_with_room(&owner, 300.0).await;
    let student = app.user("Student", UserRole::Student).await;
    let booking_id = book(&app, &student, &room_id, "2027-06-01", "2027-06-03")
        .await
        .id();
    let path = format!("/api/bookings/{booking_id}");

    let self_confirm = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "status": "confirmed" })),
            Some(&student.token),
        )
        .await;
    assert_eq!(self_confirm.status, StatusCode::FORBIDDEN);

    let confirmed = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "status": "confirmed" })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(confirmed.status, StatusCode::OK, "{:?}", confirmed.body);

    let cancelled = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "status": "cancelled" })),
            Some(&student.token),
        )
        .await;
    assert_eq!(cancelled.status, StatusCode::OK, "{:?}", cancelled.body);

    let notifications = app
        .request("GET", "/api/notifications/unread-count", None, Some(&student.token))
        .await;
    assert_eq!(notifications.body["data"]["count"], 2);
}
