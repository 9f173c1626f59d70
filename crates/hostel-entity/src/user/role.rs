//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles recognised by the authorization policy.
///
/// `hostel_owner` and `guest` are accepted as aliases of `owner` and
/// `student` on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// System administrator.
    Admin,
    /// Owns and manages hostels.
    #[serde(alias = "hostel_owner")]
    Owner,
    /// Hostel staff handling complaints.
    Staff,
    /// Resident or prospective guest.
    #[serde(alias = "guest")]
    Student,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Roles a user may pick for themselves when registering.
    pub fn is_self_registrable(&self) -> bool {
        matches!(self, Self::Owner | Self::Student)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Owner => "owner",
            Self::Staff => "staff",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = hostel_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "owner" | "hostel_owner" => Ok(Self::Owner),
            "staff" => Ok(Self::Staff),
            "student" | "guest" => Ok(Self::Student),
            _ => Err(hostel_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, owner, staff, student"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("hostel_owner".parse::<UserRole>().unwrap(), UserRole::Owner);
        assert_eq!("GUEST".parse::<UserRole>().unwrap(), UserRole::Student);
        assert!("janitor".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_serde_aliases() {
        let role: UserRole = serde_json::from_str("\"guest\"").unwrap();
        assert_eq!(role, UserRole::Student);
        assert_eq!(serde_json::to_string(&UserRole::Owner).unwrap(), "\"owner\"");
    }

    #[test]
    fn test_self_registration_roles() {
        assert!(UserRole::Student.is_self_registrable());
        assert!(UserRole::Owner.is_self_registrable());
        assert!(!UserRole::Staff.is_self_registrable());
        assert!(!UserRole::Admin.is_self_registrable());
    }
}
