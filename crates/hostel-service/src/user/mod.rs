//! Registration, profile and admin user management services.

pub mod admin;
pub mod service;

pub use admin::{AdminUserService, CreateUserRequest, UserQuery};
pub use service::{ChangePasswordRequest, RegisterRequest, UpdateProfileRequest, UserService};
