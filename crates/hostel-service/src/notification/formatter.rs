//! Turns domain events into notification rows.

use hostel_core::events::{
    BookingEvent, ComplaintEvent, DomainEvent, EventPayload, PaymentEvent, RoomEvent, SystemEvent,
};
use hostel_entity::notification::{CreateNotification, NotificationType, RelatedModel};

/// Notifications produced by an event, one per recipient.
///
/// Announcements produce nothing here: they go to every user and are
/// written by the dispatcher in a single statement.
pub fn notifications_for(event: &DomainEvent) -> Vec<CreateNotification> {
    match &event.payload {
        EventPayload::Booking(BookingEvent::StatusChanged {
            booking_id,
            user_id,
            to,
            ..
        }) => {
            let notification_type = match to.as_str() {
                "confirmed" => NotificationType::Success,
                "cancelled" => NotificationType::Warning,
                _ => NotificationType::Info,
            };
            vec![CreateNotification {
                recipient_id: *user_id,
                title: "Booking Update".to_string(),
                message: format!("Your booking has been {to}."),
                notification_type,
                related_model: Some(RelatedModel::Booking),
                related_id: Some(*booking_id),
            }]
        }
        EventPayload::Payment(PaymentEvent::Received {
            payment_id,
            user_id,
            amount,
            transaction_id,
            ..
        }) => vec![CreateNotification {
            recipient_id: *user_id,
            title: "Payment Confirmation".to_string(),
            message: format!(
                "Your payment of {amount:.2} has been received. Transaction ID: {transaction_id}."
            ),
            notification_type: NotificationType::Success,
            related_model: Some(RelatedModel::Payment),
            related_id: Some(*payment_id),
        }],
        EventPayload::Complaint(ComplaintEvent::StatusChanged {
            complaint_id,
            student_id,
            title,
            status,
        }) => {
            let (notification_type, message) = match status.as_str() {
                "in-progress" => (
                    NotificationType::Info,
                    format!("Your complaint \"{title}\" is now being worked on."),
                ),
                "resolved" => (
                    NotificationType::Success,
                    format!("Your complaint \"{title}\" has been resolved."),
                ),
                "rejected" => (
                    NotificationType::Warning,
                    format!("Your complaint \"{title}\" has been rejected."),
                ),
                other => (
                    NotificationType::Info,
                    format!("Your complaint \"{title}\" is now {other}."),
                ),
            };
            vec![CreateNotification {
                recipient_id: *student_id,
                title: "Complaint Update".to_string(),
                message,
                notification_type,
                related_model: Some(RelatedModel::Complaint),
                related_id: Some(*complaint_id),
            }]
        }
        EventPayload::Complaint(ComplaintEvent::Assigned {
            complaint_id,
            student_id,
            staff_id,
            title,
        }) => vec![
            CreateNotification {
                recipient_id: *student_id,
                title: "Complaint Update".to_string(),
                message: format!("A staff member has been assigned to your complaint \"{title}\"."),
                notification_type: NotificationType::Info,
                related_model: Some(RelatedModel::Complaint),
                related_id: Some(*complaint_id),
            },
            CreateNotification {
                recipient_id: *staff_id,
                title: "Complaint Assigned".to_string(),
                message: format!("You have been assigned the complaint \"{title}\"."),
                notification_type: NotificationType::Info,
                related_model: Some(RelatedModel::Complaint),
                related_id: Some(*complaint_id),
            },
        ],
        EventPayload::Room(RoomEvent::Allocated {
            room_id,
            student_id,
            room_number,
            block,
        }) => vec![CreateNotification {
            recipient_id: *student_id,
            title: "Room Allocated".to_string(),
            message: format!("You have been allocated room {room_number} in block {block}."),
            notification_type: NotificationType::Info,
            related_model: Some(RelatedModel::Room),
            related_id: Some(*room_id),
        }],
        EventPayload::System(SystemEvent::Announcement { .. }) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn event(payload: impl Into<EventPayload>) -> DomainEvent {
        DomainEvent::new(Some(Uuid::new_v4()), payload.into())
    }

    #[test]
    fn test_payment_confirmation() {
        let user_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();
        let out = notifications_for(&event(PaymentEvent::Received {
            payment_id,
            booking_id: Uuid::new_v4(),
            user_id,
            amount: 2250.0,
            transaction_id: "TRANS_abc123def456g".to_string(),
        }));

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].recipient_id, user_id);
        assert_eq!(out[0].title, "Payment Confirmation");
        assert!(out[0].message.contains("2250.00"));
        assert_eq!(out[0].notification_type, NotificationType::Success);
        assert_eq!(out[0].related_model, Some(RelatedModel::Payment));
        assert_eq!(out[0].related_id, Some(payment_id));
    }

    #[test]
    fn test_booking_cancellation_is_a_warning() {
        let out = notifications_for(&event(BookingEvent::StatusChanged {
            booking_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            from: "pending".to_string(),
            to: "cancelled".to_string(),
        }));
        assert_eq!(out[0].notification_type, NotificationType::Warning);
        assert_eq!(out[0].message, "Your booking has been cancelled.");
    }

    #[test]
    fn test_complaint_status_types() {
        let cases = [
            ("in-progress", NotificationType::Info),
            ("resolved", NotificationType::Success),
            ("rejected", NotificationType::Warning),
        ];
        for (status, expected) in cases {
            let out = notifications_for(&event(ComplaintEvent::StatusChanged {
                complaint_id: Uuid::new_v4(),
                student_id: Uuid::new_v4(),
                title: "Leaking tap".to_string(),
                status: status.to_string(),
            }));
            assert_eq!(out[0].notification_type, expected, "status {status}");
        }
    }

    #[test]
    fn test_assignment_notifies_student_and_staff() {
        let student_id = Uuid::new_v4();
        let staff_id = Uuid::new_v4();
        let out = notifications_for(&event(ComplaintEvent::Assigned {
            complaint_id: Uuid::new_v4(),
            student_id,
            staff_id,
            title: "No hot water".to_string(),
        }));
        let recipients: Vec<Uuid> = out.iter().map(|n| n.recipient_id).collect();
        assert_eq!(recipients, vec![student_id, staff_id]);
    }

    #[test]
    fn test_announcement_is_left_to_broadcast() {
        let out = notifications_for(&event(SystemEvent::Announcement {
            admin_id: Uuid::new_v4(),
            title: "Water shutdown".to_string(),
            message: "No water on Sunday morning".to_string(),
            severity: "warning".to_string(),
        }));
        assert!(out.is_empty());
    }
}
