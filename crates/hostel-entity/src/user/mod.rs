//! User entity and role.

pub mod model;
pub mod role;

pub use model::{CreateUser, UpdateProfile, User, UserSummary};
pub use role::UserRole;
