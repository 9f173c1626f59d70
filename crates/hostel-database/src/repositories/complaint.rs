//! Complaint and complaint-comment repository implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_entity::complaint::{
    CommentView, Complaint, ComplaintComment, ComplaintPriority, ComplaintStatus, ComplaintType,
    ComplaintView, CreateComplaint,
};
use hostel_entity::user::{UserRole, UserSummary};

const VIEW_SELECT: &str = "SELECT c.*, s.name AS student_name, s.email AS student_email, \
     a.name AS assignee_name, a.email AS assignee_email \
     FROM complaints c \
     JOIN users s ON s.id = c.student_id \
     LEFT JOIN users a ON a.id = c.assigned_to";

const FILTER: &str = "WHERE ($1::complaint_status IS NULL OR c.status = $1) \
     AND ($2::complaint_type IS NULL OR c.complaint_type = $2) \
     AND ($3::complaint_priority IS NULL OR c.priority = $3) \
     AND ($4::text IS NULL OR c.hostel_block = $4) \
     AND ($5::text IS NULL OR c.room_number = $5) \
     AND ($6::uuid IS NULL OR c.student_id = $6) \
     AND ($7::uuid IS NULL OR c.assigned_to = $7 OR c.assigned_to IS NULL) \
     AND ($8::uuid IS NULL OR c.assigned_to = $8) \
     AND ($9::timestamptz IS NULL OR c.created_at >= $9) \
     AND ($10::timestamptz IS NULL OR c.created_at <= $10)";

macro_rules! bind_filter {
    ($query:expr, $filter:expr) => {
        $query
            .bind($filter.status)
            .bind($filter.complaint_type)
            .bind($filter.priority)
            .bind(&$filter.hostel_block)
            .bind(&$filter.room_number)
            .bind($filter.student_id)
            .bind($filter.visible_to_staff)
            .bind($filter.assigned_to)
            .bind($filter.created_from)
            .bind($filter.created_to)
    };
}

/// Filters shared by complaint listings, exports, and statistics.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    pub status: Option<ComplaintStatus>,
    pub complaint_type: Option<ComplaintType>,
    pub priority: Option<ComplaintPriority>,
    pub hostel_block: Option<String>,
    pub room_number: Option<String>,
    /// Only complaints filed by this student.
    pub student_id: Option<Uuid>,
    /// Only complaints assigned to this staff member or unassigned.
    pub visible_to_staff: Option<Uuid>,
    /// Only complaints assigned to exactly this staff member.
    pub assigned_to: Option<Uuid>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

/// Projection used to compute complaint statistics.
#[derive(Debug, Clone, FromRow)]
pub struct ComplaintStatRow {
    pub status: ComplaintStatus,
    pub complaint_type: ComplaintType,
    pub priority: ComplaintPriority,
    pub hostel_block: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
struct ComplaintViewRow {
    #[sqlx(flatten)]
    complaint: Complaint,
    student_name: String,
    student_email: String,
    assignee_name: Option<String>,
    assignee_email: Option<String>,
}

impl ComplaintViewRow {
    fn into_view(self, comments: Vec<CommentView>) -> ComplaintView {
        let assignee = match (self.complaint.assigned_to, self.assignee_name, self.assignee_email) {
            (Some(id), Some(name), Some(email)) => Some(UserSummary { id, name, email }),
            _ => None,
        };
        ComplaintView {
            student: UserSummary {
                id: self.complaint.student_id,
                name: self.student_name,
                email: self.student_email,
            },
            assignee,
            comments,
            complaint: self.complaint,
        }
    }
}

/// Repository for complaints and their comment threads.
#[derive(Debug, Clone)]
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    /// Create a new complaint repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a complaint by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Complaint>> {
        sqlx::query_as::<_, Complaint>("SELECT * FROM complaints WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find complaint", e))
    }

    /// Find a complaint with its student, assignee, and comments.
    pub async fn find_view_by_id(&self, id: Uuid) -> AppResult<Option<ComplaintView>> {
        let row = sqlx::query_as::<_, ComplaintViewRow>(&format!("{VIEW_SELECT} WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find complaint", e))?;

        match row {
            Some(row) => {
                let comments = self.find_comments(&[row.complaint.id]).await?;
                Ok(Some(row.into_view(comments)))
            }
            None => Ok(None),
        }
    }

    /// Paginated listing, newest first.
    pub async fn find_page(
        &self,
        filter: &ComplaintFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ComplaintView>> {
        let total: i64 = bind_filter!(
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM complaints c {FILTER}")),
            filter
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count complaints", e))?;

        let rows = bind_filter!(
            sqlx::query_as::<_, ComplaintViewRow>(&format!(
                "{VIEW_SELECT} {FILTER} ORDER BY c.created_at DESC LIMIT $11 OFFSET $12"
            )),
            filter
        )
        .bind(page.sql_limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list complaints", e))?;

        let items = self.attach_comments(rows).await?;
        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Unpaginated listing, newest first. `limit` caps the row count.
    pub async fn find_matching(
        &self,
        filter: &ComplaintFilter,
        limit: Option<i64>,
    ) -> AppResult<Vec<ComplaintView>> {
        let rows = bind_filter!(
            sqlx::query_as::<_, ComplaintViewRow>(&format!(
                "{VIEW_SELECT} {FILTER} ORDER BY c.created_at DESC LIMIT $11"
            )),
            filter
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list complaints", e))?;

        self.attach_comments(rows).await
    }

    /// Projection rows for statistics.
    pub async fn find_stat_rows(&self, filter: &ComplaintFilter) -> AppResult<Vec<ComplaintStatRow>> {
        bind_filter!(
            sqlx::query_as::<_, ComplaintStatRow>(&format!(
                "SELECT c.status, c.complaint_type, c.priority, c.hostel_block, c.created_at, \
                 c.resolved_at FROM complaints c {FILTER}"
            )),
            filter
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load complaint stats", e))
    }

    async fn attach_comments(&self, rows: Vec<ComplaintViewRow>) -> AppResult<Vec<ComplaintView>> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.complaint.id).collect();
        let mut by_complaint: HashMap<Uuid, Vec<CommentView>> = HashMap::new();
        for comment in self.find_comments(&ids).await? {
            by_complaint
                .entry(comment.comment.complaint_id)
                .or_default()
                .push(comment);
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let comments = by_complaint.remove(&row.complaint.id).unwrap_or_default();
                row.into_view(comments)
            })
            .collect())
    }

    /// Comments on the given complaints, most recent first.
    pub async fn find_comments(&self, complaint_ids: &[Uuid]) -> AppResult<Vec<CommentView>> {
        if complaint_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, CommentView>(
            "SELECT cc.*, u.name AS author_name FROM complaint_comments cc \
             JOIN users u ON u.id = cc.author_id \
             WHERE cc.complaint_id = ANY($1) ORDER BY cc.created_at DESC",
        )
        .bind(complaint_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load comments", e))
    }

    /// Create a complaint in the `pending` state.
    pub async fn create(&self, data: &CreateComplaint) -> AppResult<Complaint> {
        sqlx::query_as::<_, Complaint>(
            "INSERT INTO complaints (id, student_id, title, description, complaint_type, priority, \
             status, hostel_block, room_number, images) \
             VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7, $8, $9) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.student_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.complaint_type)
        .bind(data.priority)
        .bind(&data.hostel_block)
        .bind(&data.room_number)
        .bind(&data.images)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create complaint", e))
    }

    /// Persist every mutable column of a complaint.
    pub async fn save(&self, complaint: &Complaint) -> AppResult<Complaint> {
        sqlx::query_as::<_, Complaint>(
            "UPDATE complaints SET title = $2, description = $3, complaint_type = $4, \
             priority = $5, status = $6, assigned_to = $7, staff_remarks = $8, images = $9, \
             resolved_at = $10, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(complaint.id)
        .bind(&complaint.title)
        .bind(&complaint.description)
        .bind(complaint.complaint_type)
        .bind(complaint.priority)
        .bind(complaint.status)
        .bind(complaint.assigned_to)
        .bind(&complaint.staff_remarks)
        .bind(&complaint.images)
        .bind(complaint.resolved_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update complaint", e))?
        .ok_or_else(|| AppError::not_found("Complaint not found"))
    }

    /// Delete a complaint and its comments.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete complaint", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Add a comment to a complaint.
    pub async fn insert_comment(
        &self,
        complaint_id: Uuid,
        author_id: Uuid,
        author_role: UserRole,
        text: &str,
    ) -> AppResult<ComplaintComment> {
        sqlx::query_as::<_, ComplaintComment>(
            "INSERT INTO complaint_comments (id, complaint_id, author_id, author_role, text) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(complaint_id)
        .bind(author_id)
        .bind(author_role)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add comment", e))
    }

    /// Find a comment on a specific complaint.
    pub async fn find_comment(
        &self,
        complaint_id: Uuid,
        comment_id: Uuid,
    ) -> AppResult<Option<ComplaintComment>> {
        sqlx::query_as::<_, ComplaintComment>(
            "SELECT * FROM complaint_comments WHERE id = $1 AND complaint_id = $2",
        )
        .bind(comment_id)
        .bind(complaint_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// Delete a comment.
    pub async fn delete_comment(&self, comment_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM complaint_comments WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete comment", e))?;
        Ok(result.rows_affected() > 0)
    }
}
