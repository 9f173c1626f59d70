//! Complaint entity, workflow states, and comment thread.

pub mod comment;
pub mod kind;
pub mod model;
pub mod status;

pub use comment::{CommentView, ComplaintComment};
pub use kind::{ComplaintPriority, ComplaintType};
pub use model::{Complaint, ComplaintView, CreateComplaint};
pub use status::ComplaintStatus;
