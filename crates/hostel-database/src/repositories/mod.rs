//! Concrete repository implementations.

pub mod booking;
pub mod complaint;
pub mod dashboard;
pub mod hostel;
pub mod notification;
pub mod payment;
pub mod review;
pub mod room;
pub mod setting;
pub mod user;

use hostel_core::error::{AppError, ErrorKind};

/// Map a sqlx error, turning violations of the listed constraints into
/// [`ErrorKind::Conflict`] with the paired message.
pub(crate) fn map_constraint(
    err: sqlx::Error,
    constraints: &[(&str, &str)],
    fallback: &str,
) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if let Some(name) = db_err.constraint() {
            if let Some((_, message)) = constraints.iter().find(|(c, _)| *c == name) {
                return AppError::conflict(*message);
            }
        }
    }
    AppError::with_source(ErrorKind::Database, fallback.to_string(), err)
}
