//! Payment repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_entity::booking::BookingStatus;
use hostel_entity::hostel::HostelSummary;
use hostel_entity::payment::{CreatePayment, Payment, PaymentView};
use hostel_entity::user::UserSummary;

use super::map_constraint;
use crate::Tx;

const VIEW_SELECT: &str = "SELECT p.*, b.status AS booking_status, b.check_in_date, \
     b.check_out_date, r.room_number, h.id AS hostel_id, h.name AS hostel_name, \
     h.city AS hostel_city, h.owner_id AS hostel_owner_id, \
     u.name AS payer_name, u.email AS payer_email \
     FROM payments p \
     JOIN bookings b ON b.id = p.booking_id \
     JOIN rooms r ON r.id = b.room_id \
     JOIN hostels h ON h.id = r.hostel_id \
     JOIN users u ON u.id = p.user_id";

#[derive(Debug, FromRow)]
struct PaymentViewRow {
    #[sqlx(flatten)]
    payment: Payment,
    booking_status: BookingStatus,
    check_in_date: DateTime<Utc>,
    check_out_date: DateTime<Utc>,
    room_number: String,
    hostel_id: Uuid,
    hostel_name: String,
    hostel_city: String,
    hostel_owner_id: Uuid,
    payer_name: String,
    payer_email: String,
}

impl From<PaymentViewRow> for PaymentView {
    fn from(row: PaymentViewRow) -> Self {
        PaymentView {
            booking_status: row.booking_status,
            check_in_date: row.check_in_date,
            check_out_date: row.check_out_date,
            room_number: row.room_number,
            hostel: HostelSummary {
                id: row.hostel_id,
                name: row.hostel_name,
                city: row.hostel_city,
                owner_id: row.hostel_owner_id,
            },
            payer: UserSummary {
                id: row.payment.user_id,
                name: row.payer_name,
                email: row.payer_email,
            },
            payment: row.payment,
        }
    }
}

/// Repository for payments.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a transaction for a check-then-write sequence.
    pub async fn begin(&self) -> AppResult<Tx> {
        self.pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))
    }

    /// Find a payment with its booking context.
    pub async fn find_view_by_id(&self, id: Uuid) -> AppResult<Option<PaymentView>> {
        sqlx::query_as::<_, PaymentViewRow>(&format!("{VIEW_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(PaymentView::from))
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find payment", e))
    }

    /// The payment recorded for a booking, if any.
    pub async fn find_by_booking(
        &self,
        conn: &mut PgConnection,
        booking_id: Uuid,
    ) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE booking_id = $1")
            .bind(booking_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find payment", e))
    }

    /// List all payments, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<PaymentView>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count payments", e))?;

        let rows = sqlx::query_as::<_, PaymentViewRow>(&format!(
            "{VIEW_SELECT} ORDER BY p.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payments", e))?;

        Ok(PageResponse::new(
            rows.into_iter().map(PaymentView::from).collect(),
            page,
            total as u64,
        ))
    }

    /// List payments made by a user.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<PaymentView>> {
        self.fetch_views("p.user_id = $1", user_id).await
    }

    /// List payments for bookings in hostels owned by a user.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<PaymentView>> {
        self.fetch_views("h.owner_id = $1", owner_id).await
    }

    async fn fetch_views(&self, condition: &str, id: Uuid) -> AppResult<Vec<PaymentView>> {
        sqlx::query_as::<_, PaymentViewRow>(&format!(
            "{VIEW_SELECT} WHERE {condition} ORDER BY p.created_at DESC"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(PaymentView::from).collect())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payments", e))
    }

    /// Insert a payment. A second payment for the same booking is a conflict.
    pub async fn insert(&self, conn: &mut PgConnection, data: &CreatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (id, booking_id, user_id, amount, payment_method, \
             transaction_id, status) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.booking_id)
        .bind(data.user_id)
        .bind(data.amount)
        .bind(data.payment_method)
        .bind(&data.transaction_id)
        .bind(data.status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            map_constraint(
                e,
                &[
                    ("payments_booking_id_key", "Payment already exists for this booking"),
                    ("payments_transaction_id_key", "Duplicate transaction id"),
                ],
                "Failed to create payment",
            )
        })
    }
}
