//! Complaint entity model and joined view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::comment::CommentView;
use super::kind::{ComplaintPriority, ComplaintType};
use super::status::ComplaintStatus;
use crate::user::UserSummary;

/// A complaint filed by a student about their room or hostel.
///
/// `resolved_at` is set exactly while `status` is `resolved`, stamped at
/// the moment of the transition.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: Uuid,
    /// The filing student.
    pub student_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub complaint_type: ComplaintType,
    pub priority: ComplaintPriority,
    pub status: ComplaintStatus,
    /// Block of the student's room when the complaint was filed.
    pub hostel_block: String,
    /// Number of the student's room when the complaint was filed.
    pub room_number: String,
    /// Staff member handling the complaint.
    pub assigned_to: Option<Uuid>,
    pub staff_remarks: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Complaint {
    /// Whether `user_id` filed this complaint.
    pub fn is_filed_by(&self, user_id: Uuid) -> bool {
        self.student_id == user_id
    }

    /// Whether `user_id` is the assigned staff member.
    pub fn is_assigned_to(&self, user_id: Uuid) -> bool {
        self.assigned_to == Some(user_id)
    }
}

/// A complaint joined with its student, assignee, and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintView {
    #[serde(flatten)]
    pub complaint: Complaint,
    pub student: UserSummary,
    pub assignee: Option<UserSummary>,
    pub comments: Vec<CommentView>,
}

/// Data required to persist a complaint.
#[derive(Debug, Clone)]
pub struct CreateComplaint {
    pub student_id: Uuid,
    pub title: String,
    pub description: String,
    pub complaint_type: ComplaintType,
    pub priority: ComplaintPriority,
    pub hostel_block: String,
    pub room_number: String,
    pub images: Vec<String>,
}
