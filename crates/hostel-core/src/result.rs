//! Convenience result type alias for HostelHub.

use crate::error::AppError;

/// A specialized `Result` type for HostelHub operations.
pub type AppResult<T> = Result<T, AppError>;
