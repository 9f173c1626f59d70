//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use hostel_auth::{PasswordHasher, PasswordValidator};
use hostel_core::config::AppConfig;
use hostel_core::error::AppError;
use hostel_core::types::pagination::PageRequest;
use hostel_database::repositories::user::UserRepository;
use hostel_entity::user::UserRole;
use hostel_service::user::{AdminUserService, CreateUserRequest};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users
    List {
        /// Filter by role
        #[arg(short, long)]
        role: Option<UserRole>,
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Page size
        #[arg(long, default_value_t = 50)]
        limit: u64,
    },
    /// Create a user of any role, typically the first administrator
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Login email
        #[arg(long)]
        email: String,
        /// Role of the new account
        #[arg(long, default_value = "admin")]
        role: UserRole,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Password; prompted for when omitted
        #[arg(long, env = "HOSTEL_USER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    room: String,
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let user_repo = Arc::new(UserRepository::new(pool));

    match &args.command {
        UserCommand::List { role, page, limit } => {
            let users = user_repo
                .find_all(*role, &PageRequest::new(*page, *limit))
                .await?;

            let rows: Vec<UserRow> = users
                .items
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    name: u.name.clone(),
                    email: u.email.clone(),
                    role: u.role.to_string(),
                    room: u.room_id.map(|r| r.to_string()).unwrap_or_default(),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!("{} of {} users", rows.len(), users.total);
            }
        }
        UserCommand::Create {
            name,
            email,
            role,
            phone,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let service = AdminUserService::new(
                user_repo,
                Arc::new(PasswordHasher::new()),
                Arc::new(PasswordValidator::new(&config.auth)),
            );
            let user = service
                .create_unchecked(CreateUserRequest {
                    name: name.clone(),
                    email: email.clone(),
                    password,
                    role: *role,
                    phone: phone.clone(),
                })
                .await?;

            output::print_success(&format!("Created {} '{}' ({})", user.role, user.email, user.id));
        }
    }

    Ok(())
}
