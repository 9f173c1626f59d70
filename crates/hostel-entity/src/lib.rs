//! # hostel-entity
//!
//! Domain entity models for HostelHub. Every struct in this crate
//! represents a database table row, a read-side join view, or a domain
//! value object. Database entities derive `sqlx::FromRow`; enums map to
//! PostgreSQL enum types.

pub mod booking;
pub mod complaint;
pub mod hostel;
pub mod notification;
pub mod payment;
pub mod review;
pub mod room;
pub mod setting;
pub mod user;
