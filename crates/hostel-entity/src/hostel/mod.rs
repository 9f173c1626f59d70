//! Hostel entity.

pub mod model;

pub use model::{CreateHostel, Hostel, HostelSummary, UpdateHostel};
