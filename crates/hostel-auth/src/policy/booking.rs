//! Booking access rules.

use uuid::Uuid;

use hostel_entity::booking::BookingStatus;
use hostel_entity::user::UserRole;

use super::{Actor, Decision, DenyReason, require_roles};

/// The parties to a booking: who made it, and who owns the hostel.
#[derive(Debug, Clone, Copy)]
pub struct BookingParties {
    pub guest_id: Uuid,
    pub hostel_owner_id: Uuid,
}

impl BookingParties {
    fn is_hostel_owner(&self, actor: &Actor) -> bool {
        actor.role == UserRole::Owner && actor.is(self.hostel_owner_id)
    }
}

/// Only students book rooms.
pub fn create(actor: &Actor) -> Decision {
    require_roles(actor, &[UserRole::Student])
}

/// Admin, the guest, or the hostel owner.
pub fn view(actor: &Actor, parties: BookingParties) -> Decision {
    Decision::allow_if(
        actor.is_admin() || actor.is(parties.guest_id) || parties.is_hostel_owner(actor),
        DenyReason::NotBookingParty,
    )
}

/// Admins may request any status, the hostel owner may confirm or cancel,
/// the guest may only cancel. Whether the transition itself is legal is
/// decided by the booking state machine afterwards.
pub fn set_status(actor: &Actor, parties: BookingParties, status: BookingStatus) -> Decision {
    if actor.is_admin() {
        return Decision::Allow;
    }
    if parties.is_hostel_owner(actor) {
        return Decision::allow_if(
            matches!(status, BookingStatus::Confirmed | BookingStatus::Cancelled),
            DenyReason::StatusNotPermitted,
        );
    }
    if actor.is(parties.guest_id) {
        return Decision::allow_if(
            status == BookingStatus::Cancelled,
            DenyReason::StatusNotPermitted,
        );
    }
    Decision::Deny(DenyReason::NotBookingParty)
}

/// Admin only.
pub fn delete(actor: &Actor) -> Decision {
    super::admin_only(actor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use BookingStatus::*;

    fn setup() -> (Actor, Actor, Actor, BookingParties) {
        let guest = Actor::new(Uuid::new_v4(), UserRole::Student);
        let owner = Actor::new(Uuid::new_v4(), UserRole::Owner);
        let admin = Actor::new(Uuid::new_v4(), UserRole::Admin);
        let parties = BookingParties {
            guest_id: guest.id,
            hostel_owner_id: owner.id,
        };
        (guest, owner, admin, parties)
    }

    #[test]
    fn test_only_students_create() {
        assert!(create(&Actor::new(Uuid::nil(), UserRole::Student)).is_allowed());
        for role in [UserRole::Admin, UserRole::Owner, UserRole::Staff] {
            assert!(!create(&Actor::new(Uuid::nil(), role)).is_allowed());
        }
    }

    #[test]
    fn test_guest_may_only_cancel() {
        let (guest, _, _, parties) = setup();
        assert!(set_status(&guest, parties, Cancelled).is_allowed());
        assert_eq!(
            set_status(&guest, parties, Confirmed).reason(),
            Some(DenyReason::StatusNotPermitted)
        );
        assert!(!set_status(&guest, parties, Completed).is_allowed());
    }

    #[test]
    fn test_owner_may_confirm_or_cancel() {
        let (_, owner, _, parties) = setup();
        assert!(set_status(&owner, parties, Confirmed).is_allowed());
        assert!(set_status(&owner, parties, Cancelled).is_allowed());
        assert!(!set_status(&owner, parties, Completed).is_allowed());
        assert!(!set_status(&owner, parties, Pending).is_allowed());
    }

    #[test]
    fn test_admin_any_status() {
        let (_, _, admin, parties) = setup();
        for status in [Pending, Confirmed, Cancelled, Completed] {
            assert!(set_status(&admin, parties, status).is_allowed());
        }
    }

    #[test]
    fn test_strangers_denied() {
        let (_, _, _, parties) = setup();
        let stranger = Actor::new(Uuid::new_v4(), UserRole::Owner);
        assert_eq!(
            set_status(&stranger, parties, Cancelled).reason(),
            Some(DenyReason::NotBookingParty)
        );
        assert!(!view(&stranger, parties).is_allowed());
    }

    #[test]
    fn test_view_parties() {
        let (guest, owner, admin, parties) = setup();
        assert!(view(&guest, parties).is_allowed());
        assert!(view(&owner, parties).is_allowed());
        assert!(view(&admin, parties).is_allowed());
    }

    #[test]
    fn test_delete_admin_only() {
        let (guest, owner, admin, _) = setup();
        assert!(delete(&admin).is_allowed());
        assert!(!delete(&guest).is_allowed());
        assert!(!delete(&owner).is_allowed());
    }
}
