//! Dashboards computed on demand from the entity store.

pub mod aggregate;
pub mod service;

pub use service::{AdminDashboard, DashboardService, HostelDashboard, StudentDashboard};
