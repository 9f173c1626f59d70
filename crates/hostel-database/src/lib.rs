//! # hostel-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all HostelHub entities.
//!
//! Repositories hold a cloned `PgPool`. Methods that take a
//! `&mut PgConnection` are meant to run inside a transaction opened with
//! one of the repositories' `begin()` methods, so that a check and the
//! write depending on it commit together.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

/// A PostgreSQL transaction owned by the caller.
pub type Tx = sqlx::Transaction<'static, sqlx::Postgres>;

/// Commit a transaction, mapping failures into [`hostel_core::AppError`].
pub async fn commit(tx: Tx) -> hostel_core::AppResult<()> {
    tx.commit().await.map_err(|e| {
        hostel_core::AppError::with_source(
            hostel_core::error::ErrorKind::Database,
            "Failed to commit transaction",
            e,
        )
    })
}
