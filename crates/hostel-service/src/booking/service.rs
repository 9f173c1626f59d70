//! Booking service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use hostel_auth::policy::{self, booking::BookingParties};
use hostel_core::error::AppError;
use hostel_core::events::{BookingEvent, DomainEvent};
use hostel_core::result::AppResult;
use hostel_core::traits::EventPublisher;
use hostel_core::types::date::deserialize_flexible;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_database::commit;
use hostel_database::repositories::booking::BookingRepository;
use hostel_database::repositories::room::RoomRepository;
use hostel_entity::booking::{BookingStatus, BookingView, CreateBooking};

use super::lifecycle;
use crate::context::RequestContext;

/// Request to book a room.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Room to book.
    #[serde(alias = "room")]
    pub room_id: Uuid,
    /// First day of the stay.
    #[serde(deserialize_with = "deserialize_flexible")]
    pub check_in_date: DateTime<Utc>,
    /// Day the guest leaves.
    #[serde(deserialize_with = "deserialize_flexible")]
    pub check_out_date: DateTime<Utc>,
    /// Free-form notes for the owner.
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Creates, lists and transitions bookings.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Outbound events.
    publisher: Arc<dyn EventPublisher>,
}

fn parties(view: &BookingView) -> BookingParties {
    BookingParties {
        guest_id: view.booking.user_id,
        hostel_owner_id: view.hostel.owner_id,
    }
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        room_repo: Arc<RoomRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            booking_repo,
            room_repo,
            publisher,
        }
    }

    /// Books a room. The room row stays locked until the new booking is
    /// committed, so concurrent requests for the same room serialize on
    /// the overlap check.
    pub async fn create_booking(
        &self,
        ctx: &RequestContext,
        req: CreateBookingRequest,
    ) -> AppResult<BookingView> {
        policy::booking::create(&ctx.actor).into_result()?;

        let mut tx = self.booking_repo.begin().await?;

        let room = self
            .room_repo
            .lock(&mut tx, req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;
        lifecycle::ensure_room_open(&room)?;

        let range = lifecycle::validate_range(req.check_in_date, req.check_out_date)?;
        let existing = self
            .booking_repo
            .find_overlapping(&mut tx, room.id, &range)
            .await?;
        lifecycle::ensure_no_overlap(&range, &existing)?;

        let booking = self
            .booking_repo
            .insert(
                &mut tx,
                &CreateBooking {
                    room_id: room.id,
                    user_id: ctx.user_id(),
                    range,
                    notes: req.notes,
                },
            )
            .await?;
        commit(tx).await?;

        info!(
            booking_id = %booking.id,
            room_id = %room.id,
            actor_id = %ctx.user_id(),
            nights = range.nights(),
            "Booking created"
        );

        self.load(booking.id).await
    }

    /// Changes a booking's status.
    ///
    /// Authorization is decided first, then the state machine. Reaching
    /// `confirmed` or `cancelled` notifies the guest.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> AppResult<BookingView> {
        let view = self.load(booking_id).await?;
        policy::booking::set_status(&ctx.actor, parties(&view), status).into_result()?;

        let mut tx = self.booking_repo.begin().await?;
        let current = self
            .booking_repo
            .lock(&mut tx, booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        lifecycle::ensure_transition(current.status, status)?;

        let updated = self
            .booking_repo
            .set_status(&mut tx, booking_id, status)
            .await?;
        commit(tx).await?;

        info!(
            booking_id = %booking_id,
            actor_id = %ctx.user_id(),
            from = %current.status,
            to = %status,
            "Booking status changed"
        );

        if status.notifies_guest() {
            let event = BookingEvent::StatusChanged {
                booking_id,
                user_id: updated.user_id,
                from: current.status.to_string(),
                to: status.to_string(),
            };
            self.publisher
                .publish_or_log(DomainEvent::new(Some(ctx.user_id()), event.into()))
                .await;
        }

        self.load(booking_id).await
    }

    /// Every booking, newest first. Admin only.
    pub async fn list_bookings(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<BookingView>> {
        policy::admin_only(&ctx.actor).into_result()?;
        self.booking_repo.find_all(&page).await
    }

    /// The caller's own bookings.
    pub async fn my_bookings(&self, ctx: &RequestContext) -> AppResult<Vec<BookingView>> {
        self.booking_repo.find_by_user(ctx.user_id()).await
    }

    /// Bookings across the caller's hostels.
    pub async fn owner_bookings(&self, ctx: &RequestContext) -> AppResult<Vec<BookingView>> {
        policy::owner_listing(&ctx.actor).into_result()?;
        self.booking_repo.find_by_owner(ctx.user_id()).await
    }

    /// A single booking, visible to its parties.
    pub async fn get_booking(&self, ctx: &RequestContext, booking_id: Uuid) -> AppResult<BookingView> {
        let view = self.load(booking_id).await?;
        policy::booking::view(&ctx.actor, parties(&view)).into_result()?;
        Ok(view)
    }

    /// Deletes a booking and any payment recorded for it. Admin only.
    pub async fn delete_booking(&self, ctx: &RequestContext, booking_id: Uuid) -> AppResult<()> {
        policy::booking::delete(&ctx.actor).into_result()?;
        if !self.booking_repo.delete(booking_id).await? {
            return Err(AppError::not_found("Booking not found"));
        }
        info!(booking_id = %booking_id, actor_id = %ctx.user_id(), "Booking deleted");
        Ok(())
    }

    async fn load(&self, booking_id: Uuid) -> AppResult<BookingView> {
        self.booking_repo
            .find_view_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))
    }
}
