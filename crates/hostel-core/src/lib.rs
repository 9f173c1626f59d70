//! # hostel-core
//!
//! Core crate for HostelHub. Contains configuration schemas, domain events,
//! the outbound event publisher trait, pagination and date helpers, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other HostelHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
