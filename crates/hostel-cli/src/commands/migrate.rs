//! Database migration command.

use hostel_core::config::AppConfig;
use hostel_core::error::AppError;

use crate::output;

/// Run all pending migrations
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    println!("Running database migrations...");
    hostel_database::migration::run_migrations(&pool).await?;
    output::print_success("All migrations applied successfully.");
    Ok(())
}
