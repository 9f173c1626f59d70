//! Payment access rules.

use uuid::Uuid;

use super::booking::BookingParties;
use super::{Actor, Decision, DenyReason};

/// Only the guest who made the booking pays for it.
pub fn create(actor: &Actor, guest_id: Uuid) -> Decision {
    Decision::allow_if(actor.is(guest_id), DenyReason::NotBookingCreator)
}

/// Same parties as the booking itself.
pub fn view(actor: &Actor, parties: BookingParties) -> Decision {
    super::booking::view(actor, parties)
}

#[cfg(test)]
mod tests {
    use hostel_entity::user::UserRole;

    use super::*;

    #[test]
    fn test_only_guest_pays() {
        let guest = Actor::new(Uuid::new_v4(), UserRole::Student);
        let owner = Actor::new(Uuid::new_v4(), UserRole::Owner);
        let parties = BookingParties {
            guest_id: guest.id,
            hostel_owner_id: owner.id,
        };
        assert!(create(&guest, guest.id).is_allowed());
        assert_eq!(
            create(&owner, guest.id).reason(),
            Some(DenyReason::NotBookingCreator)
        );
        assert!(!create(&Actor::new(Uuid::new_v4(), UserRole::Admin), guest.id).is_allowed());
        assert!(view(&owner, parties).is_allowed());
    }
}
