//! Payment service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use hostel_auth::policy::{self, booking::BookingParties};
use hostel_core::error::AppError;
use hostel_core::events::{DomainEvent, PaymentEvent};
use hostel_core::result::AppResult;
use hostel_core::traits::EventPublisher;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_database::commit;
use hostel_database::repositories::booking::BookingRepository;
use hostel_database::repositories::payment::PaymentRepository;
use hostel_database::repositories::room::RoomRepository;
use hostel_entity::booking::BookingStatus;
use hostel_entity::payment::{CreatePayment, PaymentMethod, PaymentStatus, PaymentView};

use super::pricing;
use crate::context::RequestContext;

/// Request to pay for a booking.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// The booking being paid for.
    #[serde(alias = "booking")]
    pub booking_id: Uuid,
    /// How the guest pays.
    pub payment_method: PaymentMethod,
}

/// Records payments and reports on them.
#[derive(Debug, Clone)]
pub struct PaymentService {
    payment_repo: Arc<PaymentRepository>,
    booking_repo: Arc<BookingRepository>,
    room_repo: Arc<RoomRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(
        payment_repo: Arc<PaymentRepository>,
        booking_repo: Arc<BookingRepository>,
        room_repo: Arc<RoomRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            payment_repo,
            booking_repo,
            room_repo,
            publisher,
        }
    }

    /// Pays for a booking and confirms it.
    ///
    /// 1. Lock the booking (NotFound)
    /// 2. Only its guest may pay (Forbidden)
    /// 3. One payment per booking (Conflict)
    /// 4. Cancelled or completed bookings cannot be paid (Conflict)
    /// 5. Insert a completed payment of nights × price
    /// 6. Move a pending booking to confirmed
    /// 7. Publish the payment confirmation
    pub async fn create_payment(
        &self,
        ctx: &RequestContext,
        req: CreatePaymentRequest,
    ) -> AppResult<PaymentView> {
        let mut tx = self.payment_repo.begin().await?;

        let booking = self
            .booking_repo
            .lock(&mut tx, req.booking_id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        policy::payment::create(&ctx.actor, booking.user_id).into_result()?;

        if self
            .payment_repo
            .find_by_booking(&mut tx, booking.id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Payment already exists for this booking"));
        }

        if booking.status.is_terminal() {
            return Err(AppError::conflict(format!(
                "Cannot pay for a {} booking",
                booking.status
            )));
        }

        let room = self
            .room_repo
            .find_by_id(booking.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;
        let range = booking
            .range()
            .ok_or_else(|| AppError::internal("Booking has an invalid date range"))?;
        let amount = pricing::stay_amount(&range, room.price);

        let payment = self
            .payment_repo
            .insert(
                &mut tx,
                &CreatePayment {
                    booking_id: booking.id,
                    user_id: ctx.user_id(),
                    amount,
                    payment_method: req.payment_method,
                    transaction_id: pricing::transaction_id(),
                    status: PaymentStatus::Completed,
                },
            )
            .await?;

        if booking.status == BookingStatus::Pending {
            self.booking_repo
                .set_status(&mut tx, booking.id, BookingStatus::Confirmed)
                .await?;
        }
        commit(tx).await?;

        info!(
            payment_id = %payment.id,
            booking_id = %booking.id,
            actor_id = %ctx.user_id(),
            amount,
            "Payment recorded"
        );

        let event = PaymentEvent::Received {
            payment_id: payment.id,
            booking_id: booking.id,
            user_id: booking.user_id,
            amount,
            transaction_id: payment.transaction_id.clone(),
        };
        self.publisher
            .publish_or_log(DomainEvent::new(Some(ctx.user_id()), event.into()))
            .await;

        self.load(payment.id).await
    }

    /// Every payment, newest first. Admin only.
    pub async fn list_payments(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<PaymentView>> {
        policy::admin_only(&ctx.actor).into_result()?;
        self.payment_repo.find_all(&page).await
    }

    /// Payments made by the caller.
    pub async fn my_payments(&self, ctx: &RequestContext) -> AppResult<Vec<PaymentView>> {
        self.payment_repo.find_by_user(ctx.user_id()).await
    }

    /// Payments received across the caller's hostels.
    pub async fn owner_payments(&self, ctx: &RequestContext) -> AppResult<Vec<PaymentView>> {
        policy::owner_listing(&ctx.actor).into_result()?;
        self.payment_repo.find_by_owner(ctx.user_id()).await
    }

    /// A single payment, visible to the booking's parties.
    pub async fn get_payment(&self, ctx: &RequestContext, payment_id: Uuid) -> AppResult<PaymentView> {
        let view = self.load(payment_id).await?;
        let parties = BookingParties {
            guest_id: view.payment.user_id,
            hostel_owner_id: view.hostel.owner_id,
        };
        policy::payment::view(&ctx.actor, parties).into_result()?;
        Ok(view)
    }

    async fn load(&self, payment_id: Uuid) -> AppResult<PaymentView> {
        self.payment_repo
            .find_view_by_id(payment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Payment not found"))
    }
}
