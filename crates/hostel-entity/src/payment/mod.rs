//! Payment entity.

pub mod model;
pub mod status;

pub use model::{CreatePayment, Payment, PaymentView};
pub use status::{PaymentMethod, PaymentStatus};
