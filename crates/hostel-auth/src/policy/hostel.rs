//! Hostel access rules.

use hostel_entity::hostel::Hostel;
use hostel_entity::user::UserRole;

use super::{Actor, Decision, DenyReason, require_roles};

/// Owners and admins may register hostels.
pub fn create(actor: &Actor) -> Decision {
    require_roles(actor, &[UserRole::Owner, UserRole::Admin])
}

/// Update and delete: admin, or the owner of this hostel.
pub fn manage(actor: &Actor, hostel: &Hostel) -> Decision {
    Decision::allow_if(
        actor.is_admin() || (actor.role == UserRole::Owner && hostel.is_owned_by(actor.id)),
        DenyReason::NotHostelOwner,
    )
}

/// Only admins may change the verification flag.
pub fn verify(actor: &Actor) -> Decision {
    super::admin_only(actor)
}

/// Verified hostels are public; unverified ones are visible to admins
/// and their owner.
pub fn view(actor: Option<&Actor>, hostel: &Hostel) -> Decision {
    let privileged = actor.is_some_and(|a| a.is_admin() || hostel.is_owned_by(a.id));
    Decision::allow_if(
        hostel.is_verified || privileged,
        DenyReason::PendingVerification,
    )
}

/// Anonymous callers and students only see verified hostels in listings.
pub fn lists_verified_only(actor: Option<&Actor>) -> bool {
    actor.is_none_or(|a| a.role == UserRole::Student)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn hostel(owner_id: Uuid, verified: bool) -> Hostel {
        Hostel {
            id: Uuid::new_v4(),
            owner_id,
            name: "Lakeview".to_string(),
            description: None,
            address: "1 Lake Rd".to_string(),
            city: "Pune".to_string(),
            amenities: vec![],
            contact_phone: None,
            contact_email: None,
            is_verified: verified,
            verified_by: None,
            rating: 0.0,
            num_reviews: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_manage_owner_or_admin() {
        let owner = Actor::new(Uuid::new_v4(), UserRole::Owner);
        let other_owner = Actor::new(Uuid::new_v4(), UserRole::Owner);
        let admin = Actor::new(Uuid::new_v4(), UserRole::Admin);
        let h = hostel(owner.id, true);

        assert!(manage(&owner, &h).is_allowed());
        assert!(manage(&admin, &h).is_allowed());
        assert_eq!(
            manage(&other_owner, &h).reason(),
            Some(DenyReason::NotHostelOwner)
        );
    }

    #[test]
    fn test_unverified_hidden_from_public() {
        let owner = Actor::new(Uuid::new_v4(), UserRole::Owner);
        let student = Actor::new(Uuid::new_v4(), UserRole::Student);
        let h = hostel(owner.id, false);

        assert!(view(Some(&owner), &h).is_allowed());
        assert!(!view(Some(&student), &h).is_allowed());
        assert!(!view(None, &h).is_allowed());
        assert!(view(None, &hostel(owner.id, true)).is_allowed());
    }

    #[test]
    fn test_listing_scope() {
        assert!(lists_verified_only(None));
        assert!(lists_verified_only(Some(&Actor::new(Uuid::nil(), UserRole::Student))));
        assert!(!lists_verified_only(Some(&Actor::new(Uuid::nil(), UserRole::Owner))));
    }

    #[test]
    fn test_only_admin_verifies() {
        assert!(verify(&Actor::new(Uuid::nil(), UserRole::Admin)).is_allowed());
        assert!(!verify(&Actor::new(Uuid::nil(), UserRole::Owner)).is_allowed());
    }
}
