//! Complaint filing, assignment, resolution and comments.

use axum::http::StatusCode;

use hostel_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_complaint_requires_room() {
    let app = TestApp::connect().await;
    let student = app.user("Roomless", UserRole::Student).await;

    let response = app
        .request(
            "POST",
            "/api/complaints",
            Some(serde_json::json!({
                "title": "Leaking tap",
                "description": "Drips all night",
                "type": "plumbing",
            })),
            Some(&student.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires HOSTEL_TEST_DATABASE_URL"]
async fn test_complaint_lifecycle() {
    let app = TestApp::connect().await;
    let owner = app.user("Owner", UserRole::Owner).await;
    let (_, room_id) = app.verified_hostel_with_room(&owner, 250.0).await;
    let student = app.user("Student", UserRole::Student).await;
    let staff = app.user("Staff", UserRole::Staff).await;
    let admin = app.user("Admin", UserRole::Admin).await;

    let allocated = app
        .request(
            "POST",
            &format!("/api/rooms/{room_id}/allocate"),
            Some(serde_json::json!({ "studentId": student.id })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(allocated.status, StatusCode::OK, "{:?}", allocated.body);
    assert_eq!(allocated.body["data"]["roomId"], room_id.as_str());

    let filed = app
        .request(
            "POST",
            "/api/complaints",
            Some(serde_json::json!({
                "title": "Leaking tap",
                "description": "Drips all night",
                "type": "plumbing",
                "priority": "high",
            })),
            Some(&student.token),
        )
        .await;
    assert_eq!(filed.status, StatusCode::CREATED, "{:?}", filed.body);
    assert_eq!(filed.body["data"]["status"], "pending");
    assert_eq!(filed.body["data"]["hostelBlock"], "A");
    assert_eq!(filed.body["data"]["roomNumber"], "101");
    let id = filed.id();

    let by_student = app
        .request(
            "PUT",
            &format!("/api/complaints/{id}/assign"),
            Some(serde_json::json!({ "staffId": staff.id })),
            Some(&student.token),
        )
        .await;
    assert_eq!(by_student.status, StatusCode::FORBIDDEN);

    let assigned = app
        .request(
            "PUT",
            &format!("/api/complaints/{id}/assign"),
            Some(serde_json::json!({ "staffId": staff.id })),
            Some(&admin.token),
        )
        .await;
    assert_eq!(assigned.status, StatusCode::OK, "{:?}", assigned.body);
    assert_eq!(assigned.body["data"]["assignedTo"], staff.id.to_string());

    let resolved = app
        .request(
            "PUT",
            &format!("/api/complaints/{id}"),
            Some(serde_json::json!({
                "status": "resolved",
                "staffRemarks": "Washer replaced",
            })),
            Some(&staff.token),
        )
        .await;
    assert_eq!(resolved.status, StatusCode::OK, "{:?}", resolved.body);
    assert_eq!(resolved.body["data"]["status"], "resolved");
    assert!(resolved.body["data"]["resolvedAt"].is_string());

    let comment = app
        .request(
            "POST",
            &format!("/api/complaints/{id}/comments"),
            Some(serde_json::json!({ "text": "Thanks, all good now" })),
            Some(&student.token),
        )
        .await;
    assert_eq!(comment.status, StatusCode::CREATED, "{:?}", comment.body);

    let stats = app
        .request("GET", "/api/complaints/stats", None, Some(&staff.token))
        .await;
    assert_eq!(stats.status, StatusCode::OK);
    assert_eq!(stats.body["data"]["total"], 1);
    assert_eq!(stats.body["data"]["byStatus"]["resolved"], 1);

    let mine = app
        .request("GET", "/api/complaints/me", None, Some(&student.token))
        .await;
    assert_eq!(mine.body["count"], 1);
    assert_eq!(mine.body["data"][0]["comments"][0]["text"], "Thanks, all good now");
}
