//! Route definitions for the HostelHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Builds the `/api` router without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(hostel_routes())
        .merge(room_routes())
        .merge(booking_routes())
        .merge(payment_routes())
        .merge(complaint_routes())
        .merge(review_routes())
        .merge(notification_routes())
        .merge(dashboard_routes())
        .merge(setting_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Registration, login and the caller's own profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/auth/me",
            get(handlers::auth::me).put(handlers::auth::update_me),
        )
        .route("/auth/password", put(handlers::auth::change_password))
}

/// Admin user management
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(handlers::user::list_users).post(handlers::user::create_user),
    )
}

fn hostel_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hostels",
            get(handlers::hostel::list_hostels).post(handlers::hostel::create_hostel),
        )
        .route("/hostels/owner", get(handlers::hostel::owner_hostels))
        .route(
            "/hostels/{id}",
            get(handlers::hostel::get_hostel)
                .put(handlers::hostel::update_hostel)
                .delete(handlers::hostel::delete_hostel),
        )
        .route("/hostels/{id}/verify", put(handlers::hostel::verify_hostel))
        .route(
            "/hostels/{id}/rooms",
            get(handlers::room::hostel_rooms).post(handlers::room::create_room),
        )
}

fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::room::list_rooms))
        .route(
            "/rooms/{id}",
            get(handlers::room::get_room)
                .put(handlers::room::update_room)
                .delete(handlers::room::delete_room),
        )
        .route("/rooms/{id}/allocate", post(handlers::room::allocate_room))
}

fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
        .route("/bookings/me", get(handlers::booking::my_bookings))
        .route("/bookings/owner", get(handlers::booking::owner_bookings))
        .route(
            "/bookings/{id}",
            get(handlers::booking::get_booking)
                .put(handlers::booking::update_booking_status)
                .delete(handlers::booking::delete_booking),
        )
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/payments",
            get(handlers::payment::list_payments).post(handlers::payment::create_payment),
        )
        .route("/payments/me", get(handlers::payment::my_payments))
        .route("/payments/owner", get(handlers::payment::owner_payments))
        .route("/payments/{id}", get(handlers::payment::get_payment))
}

/// Complaint workflow, statistics, export and comment threads
fn complaint_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/complaints",
            get(handlers::complaint::list_complaints).post(handlers::complaint::create_complaint),
        )
        .route("/complaints/me", get(handlers::complaint::my_complaints))
        .route("/complaints/stats", get(handlers::complaint::complaint_stats))
        .route("/complaints/export", get(handlers::complaint::export_complaints))
        .route(
            "/complaints/status/{status}",
            get(handlers::complaint::complaints_by_status),
        )
        .route(
            "/complaints/room/{block}/{room}",
            get(handlers::complaint::complaints_by_room),
        )
        .route(
            "/complaints/{id}",
            get(handlers::complaint::get_complaint)
                .put(handlers::complaint::update_complaint)
                .delete(handlers::complaint::delete_complaint),
        )
        .route(
            "/complaints/{id}/assign",
            put(handlers::complaint::assign_complaint),
        )
        .route(
            "/complaints/{id}/comments",
            post(handlers::complaint::add_comment),
        )
        .route(
            "/complaints/{id}/comments/{comment_id}",
            delete(handlers::complaint::delete_comment),
        )
}

fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reviews",
            get(handlers::review::list_reviews).post(handlers::review::create_review),
        )
        .route("/reviews/me", get(handlers::review::my_reviews))
        .route("/reviews/owner", get(handlers::review::owner_reviews))
        .route("/reviews/hostel/{id}", get(handlers::review::hostel_reviews))
        .route(
            "/reviews/{id}",
            get(handlers::review::get_review)
                .put(handlers::review::update_review)
                .delete(handlers::review::delete_review),
        )
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/announce",
            post(handlers::notification::announce),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete_notification),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(handlers::dashboard::admin_stats))
        .route(
            "/dashboard/student-stats",
            get(handlers::dashboard::student_stats),
        )
        .route(
            "/dashboard/hostel-stats",
            get(handlers::dashboard::hostel_stats),
        )
}

fn setting_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(handlers::setting::list_settings))
        .route("/settings/public", get(handlers::setting::public_settings))
        .route("/settings/initialize", post(handlers::setting::initialize))
        .route(
            "/settings/{key}",
            get(handlers::setting::get_setting)
                .put(handlers::setting::upsert_setting)
                .delete(handlers::setting::delete_setting),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
