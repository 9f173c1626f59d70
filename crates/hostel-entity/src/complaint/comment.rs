//! Complaint comment thread entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserRole;

/// A comment on a complaint. Threads are listed most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintComment {
    pub id: Uuid,
    pub complaint_id: Uuid,
    /// The commenting user.
    pub author_id: Uuid,
    /// The author's role at the time of commenting.
    pub author_role: UserRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A comment with its author's display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub comment: ComplaintComment,
    pub author_name: String,
}
