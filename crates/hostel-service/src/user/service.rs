//! User self-service: registration, profile and password changes.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use validator::Validate;

use hostel_auth::login::{Authenticator, LoginResult};
use hostel_auth::password::{PasswordHasher, PasswordValidator};
use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_database::repositories::user::UserRepository;
use hostel_entity::user::{CreateUser, UpdateProfile, User, UserRole};

use crate::context::RequestContext;

/// Self-registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    /// `student` when omitted. Only student and owner may self-register.
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub phone: Option<String>,
}

fn default_role() -> UserRole {
    UserRole::Student
}

/// Fields a user may change about themselves.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Token issuing.
    authenticator: Arc<Authenticator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            authenticator,
        }
    }

    /// Creates an account and signs it in.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<LoginResult> {
        if !req.role.is_self_registrable() {
            return Err(AppError::validation(format!(
                "Role '{}' cannot be chosen at registration",
                req.role
            )));
        }
        self.validator.validate(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: req.name,
                email: req.email,
                password_hash: self.hasher.hash_password(&req.password)?,
                role: req.role,
                phone: req.phone,
            })
            .await?;
        info!(user_id = %user.id, role = %user.role, "User registered");

        self.authenticator.issue_for(user)
    }

    /// Gets the current user's profile.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's name and phone.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> AppResult<User> {
        let user = self
            .user_repo
            .update_profile(
                ctx.user_id(),
                &UpdateProfile {
                    name: req.name,
                    phone: req.phone,
                },
            )
            .await?;
        info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    /// Changes the current user's password after checking the old one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        req: ChangePasswordRequest,
    ) -> AppResult<()> {
        let user = self.me(ctx).await?;
        if !self
            .hasher
            .verify_password(&req.current_password, &user.password_hash)?
        {
            return Err(AppError::unauthorized("Current password is incorrect"));
        }
        self.validator
            .validate_not_same(&req.current_password, &req.new_password)?;
        self.validator.validate(&req.new_password)?;

        let hash = self.hasher.hash_password(&req.new_password)?;
        self.user_repo.update_password(user.id, &hash).await?;
        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}
