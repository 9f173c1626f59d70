//! Booking entity, its status state machine, and the joined read view.

pub mod model;
pub mod status;

pub use model::{Booking, BookingView, CreateBooking};
pub use status::BookingStatus;
