//! Domain events emitted by HostelHub operations.
//!
//! Engines publish events after their write has committed. The
//! notification dispatcher turns them into per-user notifications.

pub mod booking;
pub mod complaint;
pub mod room;
pub mod system;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use booking::{BookingEvent, PaymentEvent};
pub use complaint::ComplaintEvent;
pub use room::RoomEvent;
pub use system::SystemEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<Uuid>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A booking-related event.
    Booking(BookingEvent),
    /// A payment-related event.
    Payment(PaymentEvent),
    /// A complaint-related event.
    Complaint(ComplaintEvent),
    /// A room-related event.
    Room(RoomEvent),
    /// A system-level event.
    System(SystemEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<Uuid>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }

    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match &self.payload {
            EventPayload::Booking(BookingEvent::StatusChanged { .. }) => "booking.status_changed",
            EventPayload::Payment(PaymentEvent::Received { .. }) => "payment.received",
            EventPayload::Complaint(ComplaintEvent::StatusChanged { .. }) => {
                "complaint.status_changed"
            }
            EventPayload::Complaint(ComplaintEvent::Assigned { .. }) => "complaint.assigned",
            EventPayload::Room(RoomEvent::Allocated { .. }) => "room.allocated",
            EventPayload::System(SystemEvent::Announcement { .. }) => "system.announcement",
        }
    }
}

impl From<BookingEvent> for EventPayload {
    fn from(event: BookingEvent) -> Self {
        Self::Booking(event)
    }
}

impl From<PaymentEvent> for EventPayload {
    fn from(event: PaymentEvent) -> Self {
        Self::Payment(event)
    }
}

impl From<ComplaintEvent> for EventPayload {
    fn from(event: ComplaintEvent) -> Self {
        Self::Complaint(event)
    }
}

impl From<RoomEvent> for EventPayload {
    fn from(event: RoomEvent) -> Self {
        Self::Room(event)
    }
}

impl From<SystemEvent> for EventPayload {
    fn from(event: SystemEvent) -> Self {
        Self::System(event)
    }
}
