//! Booking lifecycle: creation with overlap checking and status changes.

pub mod lifecycle;
pub mod service;

pub use service::{BookingService, CreateBookingRequest};
