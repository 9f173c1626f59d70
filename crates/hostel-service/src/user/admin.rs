//! Admin user management.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use validator::Validate;

use hostel_auth::password::{PasswordHasher, PasswordValidator};
use hostel_auth::policy;
use hostel_core::result::AppResult;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_database::repositories::user::UserRepository;
use hostel_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Request to create a user of any role.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub phone: Option<String>,
}

/// Listing filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub role: Option<UserRole>,
}

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Lists users, optionally of one role.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        query: UserQuery,
        page: PageRequest,
    ) -> AppResult<PageResponse<User>> {
        policy::admin_only(&ctx.actor).into_result()?;
        self.user_repo.find_all(query.role, &page).await
    }

    /// Creates a user of any role.
    pub async fn create_user(&self, ctx: &RequestContext, req: CreateUserRequest) -> AppResult<User> {
        policy::admin_only(&ctx.actor).into_result()?;
        self.create_unchecked(req).await
    }

    /// Creates a user without an acting admin. Used by the CLI to
    /// bootstrap the first administrator.
    pub async fn create_unchecked(&self, req: CreateUserRequest) -> AppResult<User> {
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
        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }
}
