//! Complaint workflow: filing, handling, assignment, comments and statistics.

pub mod service;
pub mod stats;
pub mod workflow;

pub use service::{
    AssignComplaintRequest, ComplaintExportRow, ComplaintQuery, ComplaintService,
    CreateCommentRequest, CreateComplaintRequest, ExportQuery, UpdateComplaintRequest,
};
pub use stats::ComplaintStats;
