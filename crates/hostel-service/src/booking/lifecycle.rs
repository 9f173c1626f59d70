//! Pure checks applied while creating and transitioning bookings.

use chrono::{DateTime, Utc};

use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_core::types::DateRange;
use hostel_entity::booking::{Booking, BookingStatus};
use hostel_entity::room::Room;

/// Bookable rooms are those flagged available.
pub fn ensure_room_open(room: &Room) -> AppResult<()> {
    if room.is_available {
        Ok(())
    } else {
        Err(AppError::conflict("Room is not available for booking"))
    }
}

/// Check-in must be strictly before check-out.
pub fn validate_range(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> AppResult<DateRange> {
    DateRange::new(check_in, check_out)
        .ok_or_else(|| AppError::validation("Check-out date must be after check-in date"))
}

/// No active booking on the room may overlap `range`.
pub fn ensure_no_overlap(range: &DateRange, existing: &[Booking]) -> AppResult<()> {
    let clash = existing
        .iter()
        .filter(|b| b.status.is_active())
        .filter_map(Booking::range)
        .any(|other| other.overlaps(range));

    if clash {
        Err(AppError::conflict("Room is already booked for the selected dates"))
    } else {
        Ok(())
    }
}

/// The booking state machine must permit `from → to`.
pub fn ensure_transition(from: BookingStatus, to: BookingStatus) -> AppResult<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(AppError::conflict(format!(
            "Cannot change booking status from {from} to {to}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use hostel_core::error::ErrorKind;
    use hostel_entity::room::{GenderPreference, RoomType};

    use super::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, d, 0, 0, 0).unwrap()
    }

    fn booking(check_in: u32, check_out: u32, status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            room_id: Uuid::nil(),
            user_id: Uuid::new_v4(),
            check_in_date: day(check_in),
            check_out_date: day(check_out),
            status,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn room(is_available: bool) -> Room {
        Room {
            id: Uuid::new_v4(),
            hostel_id: Uuid::new_v4(),
            room_number: "101".into(),
            room_type: RoomType::Single,
            block: "A".into(),
            price: 500.0,
            capacity: 1,
            amenities: vec![],
            gender_preference: GenderPreference::Any,
            is_available,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_overlapping_request_conflicts() {
        let existing = [booking(1, 10, BookingStatus::Pending)];
        let range = validate_range(day(5), day(12)).unwrap();
        let err = ensure_no_overlap(&range, &existing).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[test]
    fn test_touching_boundary_is_free() {
        let existing = [booking(1, 10, BookingStatus::Pending)];
        let range = validate_range(day(10), day(15)).unwrap();
        assert!(ensure_no_overlap(&range, &existing).is_ok());
    }

    #[test]
    fn test_inactive_bookings_do_not_block() {
        let existing = [
            booking(1, 10, BookingStatus::Cancelled),
            booking(1, 10, BookingStatus::Completed),
        ];
        let range = validate_range(day(2), day(4)).unwrap();
        assert!(ensure_no_overlap(&range, &existing).is_ok());
    }

    #[test]
    fn test_inverted_or_empty_range_is_invalid() {
        assert_eq!(
            validate_range(day(10), day(1)).unwrap_err().kind,
            ErrorKind::Validation
        );
        assert_eq!(
            validate_range(day(3), day(3)).unwrap_err().kind,
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_unavailable_room_conflicts() {
        assert!(ensure_room_open(&room(true)).is_ok());
        assert_eq!(
            ensure_room_open(&room(false)).unwrap_err().kind,
            ErrorKind::Conflict
        );
    }

    #[test]
    fn test_transition_guard() {
        assert!(ensure_transition(BookingStatus::Pending, BookingStatus::Cancelled).is_ok());
        let err = ensure_transition(BookingStatus::Cancelled, BookingStatus::Confirmed).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert!(err.message.contains("cancelled"));
    }
}
