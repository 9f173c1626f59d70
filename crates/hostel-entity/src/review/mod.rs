//! Review entity.

pub mod model;

pub use model::{Review, ReviewView};
