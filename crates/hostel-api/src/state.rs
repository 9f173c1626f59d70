//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use hostel_auth::{Authenticator, JwtDecoder};
use hostel_core::config::AppConfig;
use hostel_service::{
    AdminUserService, BookingService, ComplaintService, DashboardService, HostelService,
    NotificationService, PaymentService, ReviewService, RoomService, SettingService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped or cheaply cloneable.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Access token validation
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Credential login
    pub authenticator: Arc<Authenticator>,

    // ── Services ─────────────────────────────────────────────
    pub user_service: Arc<UserService>,
    pub admin_user_service: Arc<AdminUserService>,
    pub hostel_service: Arc<HostelService>,
    pub room_service: Arc<RoomService>,
    pub booking_service: Arc<BookingService>,
    pub payment_service: Arc<PaymentService>,
    pub complaint_service: Arc<ComplaintService>,
    pub review_service: Arc<ReviewService>,
    pub notification_service: Arc<NotificationService>,
    pub dashboard_service: Arc<DashboardService>,
    pub setting_service: Arc<SettingService>,
}
