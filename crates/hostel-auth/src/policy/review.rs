//! Review access rules.

use uuid::Uuid;

use super::{Actor, Decision, DenyReason};

/// Reviewing requires a completed stay in the hostel; admins bypass it.
pub fn create(actor: &Actor, has_completed_stay: bool) -> Decision {
    Decision::allow_if(
        actor.is_admin() || has_completed_stay,
        DenyReason::NoCompletedStay,
    )
}

/// Update and delete: the author or an admin.
pub fn modify(actor: &Actor, author_id: Uuid) -> Decision {
    Decision::allow_if(
        actor.is_admin() || actor.is(author_id),
        DenyReason::NotReviewAuthor,
    )
}

#[cfg(test)]
mod tests {
    use hostel_entity::user::UserRole;

    use super::*;

    #[test]
    fn test_create_needs_completed_stay() {
        let student = Actor::new(Uuid::new_v4(), UserRole::Student);
        assert!(create(&student, true).is_allowed());
        assert_eq!(create(&student, false).reason(), Some(DenyReason::NoCompletedStay));
        assert!(create(&Actor::new(Uuid::new_v4(), UserRole::Admin), false).is_allowed());
    }

    #[test]
    fn test_modify_author_or_admin() {
        let author = Actor::new(Uuid::new_v4(), UserRole::Student);
        assert!(modify(&author, author.id).is_allowed());
        assert!(modify(&Actor::new(Uuid::new_v4(), UserRole::Admin), author.id).is_allowed());
        assert!(!modify(&Actor::new(Uuid::new_v4(), UserRole::Owner), author.id).is_allowed());
    }
}
