//! Booking repository implementation.

use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_core::types::DateRange;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_entity::booking::{Booking, BookingStatus, BookingView, CreateBooking};
use hostel_entity::hostel::HostelSummary;
use hostel_entity::room::{RoomSummary, RoomType};
use hostel_entity::user::UserSummary;

use crate::Tx;

const VIEW_SELECT: &str = "SELECT b.*, r.room_number, r.room_type, r.block, r.price, \
     h.id AS hostel_id, h.name AS hostel_name, h.city AS hostel_city, \
     h.owner_id AS hostel_owner_id, u.name AS guest_name, u.email AS guest_email \
     FROM bookings b \
     JOIN rooms r ON r.id = b.room_id \
     JOIN hostels h ON h.id = r.hostel_id \
     JOIN users u ON u.id = b.user_id";

#[derive(Debug, FromRow)]
struct BookingViewRow {
    #[sqlx(flatten)]
    booking: Booking,
    room_number: String,
    room_type: RoomType,
    block: String,
    price: f64,
    hostel_id: Uuid,
    hostel_name: String,
    hostel_city: String,
    hostel_owner_id: Uuid,
    guest_name: String,
    guest_email: String,
}

impl From<BookingViewRow> for BookingView {
    fn from(row: BookingViewRow) -> Self {
        BookingView {
            room: RoomSummary {
                id: row.booking.room_id,
                room_number: row.room_number,
                room_type: row.room_type,
                block: row.block,
                price: row.price,
            },
            hostel: HostelSummary {
                id: row.hostel_id,
                name: row.hostel_name,
                city: row.hostel_city,
                owner_id: row.hostel_owner_id,
            },
            guest: UserSummary {
                id: row.booking.user_id,
                name: row.guest_name,
                email: row.guest_email,
            },
            booking: row.booking,
        }
    }
}

/// Repository for bookings and their joined views.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
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

    /// Find a booking with its room, hostel, and guest.
    pub async fn find_view_by_id(&self, id: Uuid) -> AppResult<Option<BookingView>> {
        sqlx::query_as::<_, BookingViewRow>(&format!("{VIEW_SELECT} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(BookingView::from))
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// List all bookings, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<BookingView>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count bookings", e))?;

        let rows = sqlx::query_as::<_, BookingViewRow>(&format!(
            "{VIEW_SELECT} ORDER BY b.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(
            rows.into_iter().map(BookingView::from).collect(),
            page,
            total as u64,
        ))
    }

    /// List the most recent bookings.
    pub async fn find_latest(&self, limit: i64) -> AppResult<Vec<BookingView>> {
        sqlx::query_as::<_, BookingViewRow>(&format!(
            "{VIEW_SELECT} ORDER BY b.created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(BookingView::from).collect())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// List bookings made by a user.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<BookingView>> {
        self.fetch_views("b.user_id = $1", user_id).await
    }

    /// List bookings on rooms of hostels owned by a user.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<BookingView>> {
        self.fetch_views("h.owner_id = $1", owner_id).await
    }

    async fn fetch_views(&self, condition: &str, id: Uuid) -> AppResult<Vec<BookingView>> {
        sqlx::query_as::<_, BookingViewRow>(&format!(
            "{VIEW_SELECT} WHERE {condition} ORDER BY b.created_at DESC"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(BookingView::from).collect())
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// Whether the user has a completed stay in any room of the hostel.
    pub async fn has_completed_stay(&self, user_id: Uuid, hostel_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM bookings b JOIN rooms r ON r.id = b.room_id \
             WHERE b.user_id = $1 AND r.hostel_id = $2 AND b.status = 'completed')",
        )
        .bind(user_id)
        .bind(hostel_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check bookings", e))
    }

    /// Active bookings on a room whose interval overlaps `range`
    /// (half-open: touching endpoints do not overlap).
    pub async fn find_overlapping(
        &self,
        conn: &mut PgConnection,
        room_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE room_id = $1 \
             AND status IN ('pending', 'confirmed') \
             AND check_in_date < $3 AND check_out_date > $2",
        )
        .bind(room_id)
        .bind(range.check_in)
        .bind(range.check_out)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check overlap", e))
    }

    /// Insert a pending booking.
    pub async fn insert(&self, conn: &mut PgConnection, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, room_id, user_id, check_in_date, check_out_date, status, notes) \
             VALUES ($1, $2, $3, $4, $5, 'pending', $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.room_id)
        .bind(data.user_id)
        .bind(data.range.check_in)
        .bind(data.range.check_out)
        .bind(&data.notes)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    /// Lock a booking row for the remainder of the transaction.
    pub async fn lock(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock booking", e))
    }

    /// Set the status of a booking.
    pub async fn set_status(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        status: BookingStatus,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update booking", e))?
        .ok_or_else(|| AppError::not_found("Booking not found"))
    }

    /// Delete a booking. Its payment is removed with it.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete booking", e))?;
        Ok(result.rows_affected() > 0)
    }
}
