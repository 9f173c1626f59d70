//! Authorization policy.
//!
//! Every function here is pure and total: it inspects an [`Actor`] and
//! the already-loaded resource and returns a [`Decision`]. Callers turn a
//! denial into an error with [`Decision::into_result`].

pub mod booking;
pub mod complaint;
pub mod decision;
pub mod hostel;
pub mod payment;
pub mod review;
pub mod room;
pub mod setting;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hostel_entity::user::UserRole;

pub use decision::{Decision, DenyReason};

/// The authenticated caller of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User ID.
    pub id: Uuid,
    /// Role at the time the credential was issued.
    pub role: UserRole,
}

impl Actor {
    /// Creates a new actor.
    pub fn new(id: Uuid, role: UserRole) -> Self {
        Self { id, role }
    }

    /// Whether the actor is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the actor holds one of the given roles.
    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }

    /// Whether the actor is the given user.
    pub fn is(&self, user_id: Uuid) -> bool {
        self.id == user_id
    }
}

/// Allow administrators only.
pub fn admin_only(actor: &Actor) -> Decision {
    Decision::allow_if(actor.is_admin(), DenyReason::AdminOnly)
}

/// Allow any of `roles`, or deny as a role mismatch.
pub fn require_roles(actor: &Actor, roles: &[UserRole]) -> Decision {
    Decision::allow_if(actor.has_any_role(roles), DenyReason::RoleNotPermitted)
}

/// The `/owner` listings are scoped to the caller's own hostels, so only
/// owners may use them. Admins use the unscoped listings instead.
pub fn owner_listing(actor: &Actor) -> Decision {
    require_roles(actor, &[UserRole::Owner])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_listing_is_owner_only() {
        assert!(owner_listing(&Actor::new(Uuid::nil(), UserRole::Owner)).is_allowed());
        for role in [UserRole::Admin, UserRole::Staff, UserRole::Student] {
            assert_eq!(
                owner_listing(&Actor::new(Uuid::nil(), role)).reason(),
                Some(DenyReason::RoleNotPermitted)
            );
        }
    }

    #[test]
    fn test_admin_only() {
        assert!(admin_only(&Actor::new(Uuid::nil(), UserRole::Admin)).is_allowed());
        assert_eq!(
            admin_only(&Actor::new(Uuid::nil(), UserRole::Owner)).reason(),
            Some(DenyReason::AdminOnly)
        );
    }
}
