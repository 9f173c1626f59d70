//! Hostel repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_entity::hostel::{CreateHostel, Hostel, UpdateHostel};

use super::map_constraint;

/// Filters accepted by [`HostelRepository::find_all`].
#[derive(Debug, Clone, Default)]
pub struct HostelFilter {
    /// Case-insensitive city match.
    pub city: Option<String>,
    /// Restrict to verified hostels regardless of `verified`.
    pub verified_only: bool,
    /// Requested verification state, if any.
    pub verified: Option<bool>,
}

/// Repository for hostel CRUD and the derived rating columns.
#[derive(Debug, Clone)]
pub struct HostelRepository {
    pool: PgPool,
}

impl HostelRepository {
    /// Create a new hostel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a hostel by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hostel>> {
        sqlx::query_as::<_, Hostel>("SELECT * FROM hostels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find hostel", e))
    }

    /// List hostels matching the filter, newest first.
    pub async fn find_all(
        &self,
        filter: &HostelFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Hostel>> {
        const WHERE: &str = "WHERE ($1::text IS NULL OR LOWER(city) = LOWER($1)) \
                             AND (NOT $2 OR is_verified) \
                             AND ($3::boolean IS NULL OR is_verified = $3)";

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM hostels {WHERE}"))
            .bind(&filter.city)
            .bind(filter.verified_only)
            .bind(filter.verified)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count hostels", e))?;

        let hostels = sqlx::query_as::<_, Hostel>(&format!(
            "SELECT * FROM hostels {WHERE} ORDER BY created_at DESC LIMIT $4 OFFSET $5"
        ))
        .bind(&filter.city)
        .bind(filter.verified_only)
        .bind(filter.verified)
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hostels", e))?;

        Ok(PageResponse::new(hostels, page, total as u64))
    }

    /// List every hostel owned by a user.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Hostel>> {
        sqlx::query_as::<_, Hostel>(
            "SELECT * FROM hostels WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list owner hostels", e))
    }

    /// Create a hostel. New hostels start unverified with no reviews.
    pub async fn create(&self, data: &CreateHostel) -> AppResult<Hostel> {
        sqlx::query_as::<_, Hostel>(
            "INSERT INTO hostels (id, owner_id, name, description, address, city, amenities, \
             contact_phone, contact_email) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.amenities)
        .bind(&data.contact_phone)
        .bind(&data.contact_email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create hostel", e))
    }

    /// Apply a partial update.
    pub async fn update(&self, id: Uuid, data: &UpdateHostel) -> AppResult<Hostel> {
        sqlx::query_as::<_, Hostel>(
            "UPDATE hostels SET \
               name = COALESCE($2, name), \
               description = COALESCE($3, description), \
               address = COALESCE($4, address), \
               city = COALESCE($5, city), \
               amenities = COALESCE($6, amenities), \
               contact_phone = COALESCE($7, contact_phone), \
               contact_email = COALESCE($8, contact_email), \
               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.amenities)
        .bind(&data.contact_phone)
        .bind(&data.contact_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update hostel", e))?
        .ok_or_else(|| AppError::not_found("Hostel not found"))
    }

    /// Set or clear the verification flag, recording the verifying admin.
    pub async fn set_verified(
        &self,
        id: Uuid,
        verified: bool,
        admin_id: Uuid,
    ) -> AppResult<Hostel> {
        sqlx::query_as::<_, Hostel>(
            "UPDATE hostels SET is_verified = $2, \
             verified_by = CASE WHEN $2 THEN $3 ELSE NULL END, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(verified)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to verify hostel", e))?
        .ok_or_else(|| AppError::not_found("Hostel not found"))
    }

    /// Delete a hostel. Rooms cascade; rooms with bookings block the delete.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM hostels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_constraint(
                    e,
                    &[(
                        "bookings_room_id_fkey",
                        "Hostel has rooms with bookings and cannot be deleted",
                    )],
                    "Failed to delete hostel",
                )
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Lock the hostel row for the remainder of the transaction.
    pub async fn lock(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<Option<Hostel>> {
        sqlx::query_as::<_, Hostel>("SELECT * FROM hostels WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock hostel", e))
    }

    /// Write the derived rating columns.
    pub async fn set_rating(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        rating: f64,
        num_reviews: i32,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE hostels SET rating = $2, num_reviews = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(rating)
        .bind(num_reviews)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update rating", e))?;
        Ok(())
    }
}
