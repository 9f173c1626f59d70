//! Room access rules.

use uuid::Uuid;

use hostel_entity::user::UserRole;

use super::{Actor, Decision, DenyReason};

/// Create, update, delete and allocate: admin, or the owner of the
/// room's hostel.
pub fn manage(actor: &Actor, hostel_owner_id: Uuid) -> Decision {
    Decision::allow_if(
        actor.is_admin() || (actor.role == UserRole::Owner && actor.is(hostel_owner_id)),
        DenyReason::NotHostelOwner,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_management() {
        let owner = Actor::new(Uuid::new_v4(), UserRole::Owner);
        assert!(manage(&owner, owner.id).is_allowed());
        assert!(manage(&Actor::new(Uuid::new_v4(), UserRole::Admin), owner.id).is_allowed());
        assert!(!manage(&Actor::new(Uuid::new_v4(), UserRole::Owner), owner.id).is_allowed());
        // a student cannot manage rooms even with a matching id
        let student = Actor::new(owner.id, UserRole::Student);
        assert!(!manage(&student, owner.id).is_allowed());
    }
}
