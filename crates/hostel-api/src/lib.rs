//! # hostel-api
//!
//! HTTP layer for HostelHub built on Axum. Handlers authenticate the
//! caller, hand a [`hostel_service::RequestContext`] to the service layer
//! and wrap the result in the JSON envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
