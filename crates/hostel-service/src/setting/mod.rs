//! System settings.

pub mod defaults;
pub mod service;

pub use service::{SettingService, UpsertSettingRequest};
