//! Credential login.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use hostel_core::error::AppError;
use hostel_database::repositories::user::UserRepository;
use hostel_entity::user::User;

use crate::jwt::{IssuedToken, JwtEncoder};
use crate::password::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// Signed access token.
    #[serde(flatten)]
    pub token: IssuedToken,
    /// The authenticated user.
    pub user: User,
}

/// Exchanges an email and password for an access token.
#[derive(Debug, Clone)]
pub struct Authenticator {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Verifies credentials and issues a token. Unknown email and wrong
    /// password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let token = self.encoder.issue(&user)?;
        info!(user_id = %user.id, role = %user.role, "Login successful");

        Ok(LoginResult { token, user })
    }

    /// Issue a token for a user that was just created.
    pub fn issue_for(&self, user: User) -> Result<LoginResult, AppError> {
        let token = self.encoder.issue(&user)?;
        Ok(LoginResult { token, user })
    }
}
