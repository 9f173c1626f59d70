//! Setting access rules.

use hostel_entity::setting::Setting;

use super::{Actor, Decision};

/// Public settings are readable by anyone; the rest by admins.
pub fn read(actor: Option<&Actor>, setting: &Setting) -> Decision {
    if setting.is_public {
        return Decision::Allow;
    }
    match actor {
        Some(actor) => super::admin_only(actor),
        None => Decision::Deny(super::DenyReason::AdminOnly),
    }
}

/// Listing, writing, deleting and initializing settings.
pub fn administer(actor: &Actor) -> Decision {
    super::admin_only(actor)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use hostel_entity::setting::SettingCategory;
    use hostel_entity::user::UserRole;

    use super::*;

    fn setting(is_public: bool) -> Setting {
        Setting {
            id: Uuid::new_v4(),
            key: "payment.currency".to_string(),
            value: json!("INR"),
            description: None,
            category: SettingCategory::Payment,
            is_public,
            updated_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_settings_are_open() {
        assert!(read(None, &setting(true)).is_allowed());
        assert!(!read(None, &setting(false)).is_allowed());
        let student = Actor::new(Uuid::new_v4(), UserRole::Student);
        assert!(!read(Some(&student), &setting(false)).is_allowed());
        let admin = Actor::new(Uuid::new_v4(), UserRole::Admin);
        assert!(read(Some(&admin), &setting(false)).is_allowed());
        assert!(!administer(&student).is_allowed());
    }
}
