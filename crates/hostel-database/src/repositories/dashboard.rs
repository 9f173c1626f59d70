//! Aggregate queries backing the dashboards.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Default, FromRow)]
pub struct SystemCounts {
    pub total_students: i64,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    pub total_bookings: i64,
    pub pending_complaints: i64,
    pub total_revenue: f64,
}

/// Revenue of completed payments for one calendar month (1-12).
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyRevenueRow {
    pub month: i32,
    pub revenue: f64,
}

/// Room occupancy within a block.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlockRooms {
    pub block: String,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
}

/// Complaint counts within a block.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlockComplaints {
    pub block: String,
    pub total: i64,
    pub pending: i64,
    pub resolved: i64,
}

/// Read-only aggregate queries.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new dashboard repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All headline counts in one round trip. Occupied rooms are rooms
    /// marked unavailable.
    pub async fn system_counts(&self) -> AppResult<SystemCounts> {
        sqlx::query_as::<_, SystemCounts>(
            "SELECT \
               (SELECT COUNT(*) FROM users WHERE role = 'student') AS total_students, \
               (SELECT COUNT(*) FROM rooms) AS total_rooms, \
               (SELECT COUNT(*) FROM rooms WHERE NOT is_available) AS occupied_rooms, \
               (SELECT COUNT(*) FROM bookings) AS total_bookings, \
               (SELECT COUNT(*) FROM complaints WHERE status = 'pending') AS pending_complaints, \
               (SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION FROM payments \
                  WHERE status = 'completed') AS total_revenue",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load system counts", e))
    }

    /// Completed-payment revenue per month of `year`. Months without
    /// payments are absent.
    pub async fn monthly_revenue(&self, year: i32) -> AppResult<Vec<MonthlyRevenueRow>> {
        sqlx::query_as::<_, MonthlyRevenueRow>(
            "SELECT EXTRACT(MONTH FROM created_at)::INT AS month, \
               SUM(amount)::DOUBLE PRECISION AS revenue \
             FROM payments \
             WHERE status = 'completed' AND EXTRACT(YEAR FROM created_at)::INT = $1 \
             GROUP BY 1 ORDER BY 1",
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load revenue", e))
    }

    /// Room totals per block.
    pub async fn rooms_by_block(&self) -> AppResult<Vec<BlockRooms>> {
        sqlx::query_as::<_, BlockRooms>(
            "SELECT block, COUNT(*) AS total_rooms, \
               COUNT(*) FILTER (WHERE NOT is_available) AS occupied_rooms \
             FROM rooms GROUP BY block ORDER BY block",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load room blocks", e))
    }

    /// Complaint totals per block.
    pub async fn complaints_by_block(&self) -> AppResult<Vec<BlockComplaints>> {
        sqlx::query_as::<_, BlockComplaints>(
            "SELECT hostel_block AS block, COUNT(*) AS total, \
               COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
               COUNT(*) FILTER (WHERE status = 'resolved') AS resolved \
             FROM complaints GROUP BY hostel_block ORDER BY hostel_block",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load complaint blocks", e)
        })
    }
}
