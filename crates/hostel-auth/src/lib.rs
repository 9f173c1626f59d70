//! # hostel-auth
//!
//! Authentication and authorization for HostelHub.
//!
//! ## Modules
//!
//! - `jwt`: access token creation and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `login`: credential login producing an access token
//! - `policy`: pure authorization decisions over an [`policy::Actor`]

pub mod jwt;
pub mod login;
pub mod password;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use login::{Authenticator, LoginResult};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::{Actor, Decision, DenyReason};
