//! Setting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Grouping used by the settings screens.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "setting_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SettingCategory {
    #[default]
    General,
    Payment,
    Booking,
    Notification,
    System,
}

/// A key/value system setting. Public settings are readable without
/// authentication.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: Uuid,
    /// Unique, lowercased key such as `payment.currency`.
    pub key: String,
    /// Loosely typed value.
    pub value: serde_json::Value,
    pub description: Option<String>,
    pub category: SettingCategory,
    pub is_public: bool,
    /// The admin who last wrote the setting.
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating or replacing a setting.
#[derive(Debug, Clone)]
pub struct UpsertSetting {
    pub key: String,
    pub value: serde_json::Value,
    pub description: Option<String>,
    pub category: SettingCategory,
    pub is_public: bool,
    pub updated_by: Option<Uuid>,
}
