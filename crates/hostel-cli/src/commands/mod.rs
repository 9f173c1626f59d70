//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod settings;
pub mod user;

use clap::{Parser, Subcommand};

use hostel_core::config::AppConfig;
use hostel_core::error::AppError;
use hostel_database::DatabasePool;

use crate::output::OutputFormat;

/// HostelHub: hostel booking and administration backend
#[derive(Debug, Parser)]
#[command(name = "hostel", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Configuration environment
    #[arg(short, long, env = "HOSTEL_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// User management
    User(user::UserArgs),
    /// System settings
    Settings(settings::SettingsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config_dir, &self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Settings(args) => settings::execute(args, &config).await,
        }
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    tracing::debug!(max_connections = config.database.max_connections, "Connecting to database");
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
