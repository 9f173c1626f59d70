//! Settings seeded by `initialize`.

use serde_json::{Value, json};
use uuid::Uuid;

use hostel_entity::setting::{SettingCategory, UpsertSetting};

struct Seed {
    key: &'static str,
    value: fn() -> Value,
    description: &'static str,
    category: SettingCategory,
    is_public: bool,
}

const DEFAULTS: &[Seed] = &[
    Seed {
        key: "system.name",
        value: || json!("Hostel Management System"),
        description: "Name of the system",
        category: SettingCategory::System,
        is_public: true,
    },
    Seed {
        key: "system.contact.email",
        value: || json!("admin@hostel.com"),
        description: "Contact email address",
        category: SettingCategory::System,
        is_public: true,
    },
    Seed {
        key: "system.contact.phone",
        value: || json!("+91-9876543210"),
        description: "Contact phone number",
        category: SettingCategory::System,
        is_public: true,
    },
    Seed {
        key: "booking.auto_approve",
        value: || json!(false),
        description: "Automatically approve bookings",
        category: SettingCategory::Booking,
        is_public: false,
    },
    Seed {
        key: "payment.currency",
        value: || json!("INR"),
        description: "Currency for payments",
        category: SettingCategory::Payment,
        is_public: true,
    },
    Seed {
        key: "payment.reminder.days",
        value: || json!(5),
        description: "Days before due date to send payment reminder",
        category: SettingCategory::Payment,
        is_public: false,
    },
    Seed {
        key: "notification.email",
        value: || json!(true),
        description: "Send email notifications",
        category: SettingCategory::Notification,
        is_public: false,
    },
];

/// The default settings, attributed to `updated_by`.
pub fn default_settings(updated_by: Option<Uuid>) -> Vec<UpsertSetting> {
    DEFAULTS
        .iter()
        .map(|d| UpsertSetting {
            key: d.key.to_string(),
            value: (d.value)(),
            description: Some(d.description.to_string()),
            category: d.category,
            is_public: d.is_public,
            updated_by,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_defaults_are_unique_lowercase_keys() {
        let settings = default_settings(None);
        assert_eq!(settings.len(), 7);
        let keys: HashSet<&str> = settings.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys.len(), settings.len());
        assert!(settings.iter().all(|s| s.key == s.key.to_lowercase()));
    }

    #[test]
    fn test_currency_is_public() {
        let settings = default_settings(None);
        let currency = settings.iter().find(|s| s.key == "payment.currency").unwrap();
        assert!(currency.is_public);
        assert_eq!(currency.value, json!("INR"));
    }
}
