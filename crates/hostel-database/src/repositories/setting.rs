//! Setting repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_entity::setting::{Setting, UpsertSetting};

/// Repository for key/value settings. Keys are stored lowercased.
#[derive(Debug, Clone)]
pub struct SettingRepository {
    pool: PgPool,
}

impl SettingRepository {
    /// Create a new setting repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every setting ordered by category and key.
    pub async fn find_all(&self) -> AppResult<Vec<Setting>> {
        sqlx::query_as::<_, Setting>("SELECT * FROM settings ORDER BY category, key")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list settings", e))
    }

    /// List public settings.
    pub async fn find_public(&self) -> AppResult<Vec<Setting>> {
        sqlx::query_as::<_, Setting>("SELECT * FROM settings WHERE is_public ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list public settings", e)
            })
    }

    /// Find a setting by key.
    pub async fn find_by_key(&self, key: &str) -> AppResult<Option<Setting>> {
        sqlx::query_as::<_, Setting>("SELECT * FROM settings WHERE key = LOWER($1)")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find setting", e))
    }

    /// Create or replace a setting.
    pub async fn upsert(&self, data: &UpsertSetting) -> AppResult<Setting> {
        sqlx::query_as::<_, Setting>(
            "INSERT INTO settings (id, key, value, description, category, is_public, updated_by) \
             VALUES ($1, LOWER($2), $3, $4, $5, $6, $7) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, \
               description = COALESCE(EXCLUDED.description, settings.description), \
               category = EXCLUDED.category, is_public = EXCLUDED.is_public, \
               updated_by = EXCLUDED.updated_by, updated_at = NOW() \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.key)
        .bind(&data.value)
        .bind(&data.description)
        .bind(data.category)
        .bind(data.is_public)
        .bind(data.updated_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save setting", e))
    }

    /// Insert a setting only if its key is absent. Returns whether it was inserted.
    pub async fn insert_if_absent(&self, data: &UpsertSetting) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO settings (id, key, value, description, category, is_public, updated_by) \
             VALUES ($1, LOWER($2), $3, $4, $5, $6, $7) ON CONFLICT (key) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(&data.key)
        .bind(&data.value)
        .bind(&data.description)
        .bind(data.category)
        .bind(data.is_public)
        .bind(data.updated_by)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to initialize setting", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a setting by key.
    pub async fn delete(&self, key: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM settings WHERE key = LOWER($1)")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete setting", e))?;
        Ok(result.rows_affected() > 0)
    }
}
