//! Review repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_entity::review::{Review, ReviewView};

use super::map_constraint;
use crate::Tx;

const VIEW_SELECT: &str = "SELECT rv.*, u.name AS student_name, h.name AS hostel_name \
     FROM reviews rv \
     JOIN users u ON u.id = rv.student_id \
     JOIN hostels h ON h.id = rv.hostel_id";

/// Repository for reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a transaction so a review write and the rating recomputation
    /// commit together.
    pub async fn begin(&self) -> AppResult<Tx> {
        self.pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))
    }

    /// Find a review by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find review", e))
    }

    /// Find a review with reviewer and hostel names.
    pub async fn find_view_by_id(&self, id: Uuid) -> AppResult<Option<ReviewView>> {
        sqlx::query_as::<_, ReviewView>(&format!("{VIEW_SELECT} WHERE rv.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find review", e))
    }

    /// List all reviews, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<ReviewView>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count reviews", e))?;

        let reviews = sqlx::query_as::<_, ReviewView>(&format!(
            "{VIEW_SELECT} ORDER BY rv.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))?;

        Ok(PageResponse::new(reviews, page, total as u64))
    }

    /// List reviews of a hostel.
    pub async fn find_by_hostel(&self, hostel_id: Uuid) -> AppResult<Vec<ReviewView>> {
        self.fetch_views("rv.hostel_id = $1", hostel_id).await
    }

    /// List reviews written by a student.
    pub async fn find_by_student(&self, student_id: Uuid) -> AppResult<Vec<ReviewView>> {
        self.fetch_views("rv.student_id = $1", student_id).await
    }

    /// List reviews of hostels owned by a user.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<ReviewView>> {
        self.fetch_views("h.owner_id = $1", owner_id).await
    }

    async fn fetch_views(&self, condition: &str, id: Uuid) -> AppResult<Vec<ReviewView>> {
        sqlx::query_as::<_, ReviewView>(&format!(
            "{VIEW_SELECT} WHERE {condition} ORDER BY rv.created_at DESC"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))
    }

    /// Insert a review. A second review by the same student for the same
    /// hostel is a conflict.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        student_id: Uuid,
        hostel_id: Uuid,
        rating: i32,
        comment: Option<&str>,
    ) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, student_id, hostel_id, rating, comment) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(student_id)
        .bind(hostel_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            map_constraint(
                e,
                &[(
                    "reviews_student_id_hostel_id_key",
                    "You have already reviewed this hostel",
                )],
                "Failed to create review",
            )
        })
    }

    /// Update rating and comment.
    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        rating: Option<i32>,
        comment: Option<&str>,
    ) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET rating = COALESCE($2, rating), comment = COALESCE($3, comment), \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(rating)
        .bind(comment)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update review", e))?
        .ok_or_else(|| AppError::not_found("Review not found"))
    }

    /// Delete a review.
    pub async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete review", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Every rating currently recorded for a hostel.
    pub async fn ratings_for_hostel(
        &self,
        conn: &mut PgConnection,
        hostel_id: Uuid,
    ) -> AppResult<Vec<i32>> {
        sqlx::query_scalar("SELECT rating FROM reviews WHERE hostel_id = $1")
            .bind(hostel_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load ratings", e))
    }
}
