//! Application builder: wires router, middleware and state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use hostel_auth::{Authenticator, JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator};
use hostel_core::config::AppConfig;
use hostel_core::error::AppError;
use hostel_core::traits::EventPublisher;
use hostel_database::repositories::{
    booking::BookingRepository, complaint::ComplaintRepository, dashboard::DashboardRepository,
    hostel::HostelRepository, notification::NotificationRepository, payment::PaymentRepository,
    review::ReviewRepository, room::RoomRepository, setting::SettingRepository,
    user::UserRepository,
};
use hostel_service::{
    AdminUserService, BookingService, ComplaintService, DashboardService, HostelService,
    NotificationDispatcher, NotificationService, PaymentService, ReviewService, RoomService,
    SettingService, UserService,
};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(build_compression_layer())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
}

/// Constructs repositories, auth components and services over one pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let hostel_repo = Arc::new(HostelRepository::new(db_pool.clone()));
    let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
    let payment_repo = Arc::new(PaymentRepository::new(db_pool.clone()));
    let complaint_repo = Arc::new(ComplaintRepository::new(db_pool.clone()));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
    let setting_repo = Arc::new(SettingRepository::new(db_pool.clone()));
    let dashboard_repo = Arc::new(DashboardRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let authenticator = Arc::new(Authenticator::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        jwt_encoder,
    ));

    // ── Notifications ────────────────────────────────────────────
    let publisher: Arc<dyn EventPublisher> =
        Arc::new(NotificationDispatcher::new(Arc::clone(&notification_repo)));

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&authenticator),
    ));
    let admin_user_service = Arc::new(AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let hostel_service = Arc::new(HostelService::new(Arc::clone(&hostel_repo)));
    let room_service = Arc::new(RoomService::new(
        Arc::clone(&room_repo),
        Arc::clone(&hostel_repo),
        Arc::clone(&user_repo),
        Arc::clone(&publisher),
    ));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&room_repo),
        Arc::clone(&publisher),
    ));
    let payment_service = Arc::new(PaymentService::new(
        Arc::clone(&payment_repo),
        Arc::clone(&booking_repo),
        Arc::clone(&room_repo),
        Arc::clone(&publisher),
    ));
    let complaint_service = Arc::new(ComplaintService::new(
        Arc::clone(&complaint_repo),
        Arc::clone(&user_repo),
        Arc::clone(&room_repo),
        Arc::clone(&publisher),
    ));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&hostel_repo),
        Arc::clone(&booking_repo),
    ));
    let notification_service = Arc::new(NotificationService::new(
        Arc::clone(&notification_repo),
        Arc::clone(&publisher),
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        dashboard_repo,
        Arc::clone(&user_repo),
        Arc::clone(&room_repo),
        Arc::clone(&booking_repo),
        Arc::clone(&payment_repo),
        Arc::clone(&complaint_repo),
        Arc::clone(&review_repo),
    ));
    let setting_service = Arc::new(SettingService::new(setting_repo));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        authenticator,
        user_service,
        admin_user_service,
        hostel_service,
        room_service,
        booking_service,
        payment_service,
        complaint_service,
        review_service,
        notification_service,
        dashboard_service,
        setting_service,
    }
}

/// Runs the HostelHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = build_app(build_state(config, db_pool.clone()));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("HostelHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!(grace_seconds = grace.as_secs(), "Draining database pool");
    if tokio::time::timeout(grace, db_pool.close()).await.is_err() {
        tracing::warn!("Database pool did not close within the grace period");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
