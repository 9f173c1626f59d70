//! System setting entity.

pub mod model;

pub use model::{Setting, SettingCategory, UpsertSetting};
