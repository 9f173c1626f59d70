//! System settings CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use hostel_core::config::AppConfig;
use hostel_core::error::AppError;
use hostel_database::repositories::setting::SettingRepository;
use hostel_service::SettingService;

use crate::output;

/// Arguments for settings commands
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Settings subcommand
    #[command(subcommand)]
    pub command: SettingsCommand,
}

/// Settings subcommands
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Insert the default settings that are missing
    Init,
}

/// Execute settings commands
pub async fn execute(args: &SettingsArgs, config: &AppConfig) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let service = SettingService::new(Arc::new(SettingRepository::new(pool)));

    match args.command {
        SettingsCommand::Init => {
            let inserted = service.seed_defaults(None).await?;
            output::print_success(&format!("{inserted} default settings inserted"));
        }
    }

    Ok(())
}
