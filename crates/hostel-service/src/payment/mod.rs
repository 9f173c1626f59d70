//! Payments: one per booking, confirming it.

pub mod pricing;
pub mod service;

pub use service::{CreatePaymentRequest, PaymentService};
