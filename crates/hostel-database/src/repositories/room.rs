//! Room repository implementation.

use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_entity::hostel::HostelSummary;
use hostel_entity::room::{CreateRoom, Room, RoomType, RoomView, UpdateRoom};

use super::map_constraint;

const VIEW_SELECT: &str = "SELECT r.*, h.name AS hostel_name, h.city AS hostel_city, \
     h.owner_id AS hostel_owner_id, h.is_verified AS hostel_verified \
     FROM rooms r JOIN hostels h ON h.id = r.hostel_id";

const FILTER: &str = "WHERE ($1::uuid IS NULL OR r.hostel_id = $1) \
     AND ($2::room_type IS NULL OR r.room_type = $2) \
     AND ($3::boolean IS NULL OR r.is_available = $3) \
     AND ($4::float8 IS NULL OR r.price <= $4) \
     AND (NOT $5 OR h.is_verified)";

/// Filters accepted by [`RoomRepository::find_all`].
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub hostel_id: Option<Uuid>,
    pub room_type: Option<RoomType>,
    pub is_available: Option<bool>,
    pub max_price: Option<f64>,
    /// Only rooms in verified hostels.
    pub verified_only: bool,
}

#[derive(Debug, FromRow)]
struct RoomViewRow {
    #[sqlx(flatten)]
    room: Room,
    hostel_name: String,
    hostel_city: String,
    hostel_owner_id: Uuid,
    hostel_verified: bool,
}

impl From<RoomViewRow> for RoomView {
    fn from(row: RoomViewRow) -> Self {
        RoomView {
            hostel: HostelSummary {
                id: row.room.hostel_id,
                name: row.hostel_name,
                city: row.hostel_city,
                owner_id: row.hostel_owner_id,
            },
            hostel_verified: row.hostel_verified,
            room: row.room,
        }
    }
}

/// Repository for room CRUD operations.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// Find a room together with its hostel.
    pub async fn find_view_by_id(&self, id: Uuid) -> AppResult<Option<RoomView>> {
        sqlx::query_as::<_, RoomViewRow>(&format!("{VIEW_SELECT} WHERE r.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(RoomView::from))
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// List rooms matching the filter, cheapest first.
    pub async fn find_all(
        &self,
        filter: &RoomFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<RoomView>> {
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM rooms r JOIN hostels h ON h.id = r.hostel_id {FILTER}"
        ))
        .bind(filter.hostel_id)
        .bind(filter.room_type)
        .bind(filter.is_available)
        .bind(filter.max_price)
        .bind(filter.verified_only)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count rooms", e))?;

        let rows = sqlx::query_as::<_, RoomViewRow>(&format!(
            "{VIEW_SELECT} {FILTER} ORDER BY r.price ASC, r.room_number ASC LIMIT $6 OFFSET $7"
        ))
        .bind(filter.hostel_id)
        .bind(filter.room_type)
        .bind(filter.is_available)
        .bind(filter.max_price)
        .bind(filter.verified_only)
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))?;

        Ok(PageResponse::new(
            rows.into_iter().map(RoomView::from).collect(),
            page,
            total as u64,
        ))
    }

    /// Create a room.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (id, hostel_id, room_number, room_type, block, price, capacity, \
             amenities, gender_preference, is_available) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.hostel_id)
        .bind(&data.room_number)
        .bind(data.room_type)
        .bind(&data.block)
        .bind(data.price)
        .bind(data.capacity)
        .bind(&data.amenities)
        .bind(data.gender_preference)
        .bind(data.is_available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint(
                e,
                &[(
                    "rooms_hostel_id_room_number_key",
                    "A room with this number already exists in the hostel",
                )],
                "Failed to create room",
            )
        })
    }

    /// Apply a partial update.
    pub async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET \
               room_number = COALESCE($2, room_number), \
               room_type = COALESCE($3, room_type), \
               block = COALESCE($4, block), \
               price = COALESCE($5, price), \
               capacity = COALESCE($6, capacity), \
               amenities = COALESCE($7, amenities), \
               gender_preference = COALESCE($8, gender_preference), \
               is_available = COALESCE($9, is_available), \
               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.room_number)
        .bind(data.room_type)
        .bind(&data.block)
        .bind(data.price)
        .bind(data.capacity)
        .bind(&data.amenities)
        .bind(data.gender_preference)
        .bind(data.is_available)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_constraint(
                e,
                &[(
                    "rooms_hostel_id_room_number_key",
                    "A room with this number already exists in the hostel",
                )],
                "Failed to update room",
            )
        })?
        .ok_or_else(|| AppError::not_found("Room not found"))
    }

    /// Whether any hostel has a room with this number in this block.
    pub async fn exists_in_block(&self, block: &str, room_number: &str) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM rooms WHERE block = $1 AND room_number = $2)",
        )
        .bind(block)
        .bind(room_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// Delete a room. Rooms referenced by bookings cannot be deleted.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_constraint(
                    e,
                    &[("bookings_room_id_fkey", "Room has bookings and cannot be deleted")],
                    "Failed to delete room",
                )
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Lock the room row for the remainder of the transaction.
    ///
    /// Booking creation holds this lock while checking for overlaps so two
    /// concurrent requests for the same room serialize.
    pub async fn lock(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock room", e))
    }
}
