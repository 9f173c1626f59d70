//! Complaint service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use hostel_auth::policy;
use hostel_core::error::AppError;
use hostel_core::events::{ComplaintEvent, DomainEvent};
use hostel_core::result::AppResult;
use hostel_core::traits::EventPublisher;
use hostel_core::types::date::deserialize_flexible_opt;
use hostel_core::types::pagination::{PageRequest, PageResponse};
use hostel_database::repositories::complaint::{ComplaintFilter, ComplaintRepository};
use hostel_database::repositories::room::RoomRepository;
use hostel_database::repositories::user::UserRepository;
use hostel_entity::complaint::{
    CommentView, Complaint, ComplaintPriority, ComplaintStatus, ComplaintType, ComplaintView,
    CreateComplaint,
};
use hostel_entity::user::{UserRole, UserSummary};

use super::stats::ComplaintStats;
use super::workflow::{self, ContentEdit, HandlingEdit};
use crate::context::RequestContext;

/// Request to file a complaint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[serde(rename = "type")]
    pub complaint_type: ComplaintType,
    #[serde(default)]
    pub priority: ComplaintPriority,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial complaint update. Students may only send content fields;
/// staff and admins may only send handling fields. Fields outside the
/// caller's branch are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaintRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 1000))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub complaint_type: Option<ComplaintType>,
    pub priority: Option<ComplaintPriority>,
    pub images: Option<Vec<String>>,
    pub status: Option<ComplaintStatus>,
    pub assigned_to: Option<Uuid>,
    #[validate(length(max = 500))]
    pub staff_remarks: Option<String>,
}

impl UpdateComplaintRequest {
    fn content(self) -> ContentEdit {
        ContentEdit {
            title: self.title,
            description: self.description,
            complaint_type: self.complaint_type,
            priority: self.priority,
            images: self.images,
        }
    }

    fn handling(self) -> HandlingEdit {
        HandlingEdit {
            status: self.status,
            assigned_to: self.assigned_to,
            staff_remarks: self.staff_remarks,
            priority: self.priority,
        }
    }
}

/// Request to assign a complaint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignComplaintRequest {
    pub staff_id: Uuid,
}

/// Request to comment on a complaint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
}

/// Listing filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintQuery {
    pub status: Option<ComplaintStatus>,
    #[serde(rename = "type")]
    pub complaint_type: Option<ComplaintType>,
}

/// Export filters. The date range applies only when both ends are given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub status: Option<ComplaintStatus>,
    #[serde(rename = "type")]
    pub complaint_type: Option<ComplaintType>,
    pub block: Option<String>,
    pub priority: Option<ComplaintPriority>,
    #[serde(default, deserialize_with = "deserialize_flexible_opt")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_flexible_opt")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Flattened complaint for export, with the comment thread reduced to a count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintExportRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub complaint_type: ComplaintType,
    pub priority: ComplaintPriority,
    pub status: ComplaintStatus,
    pub hostel_block: String,
    pub room_number: String,
    pub student: UserSummary,
    pub assigned_to: Option<UserSummary>,
    pub comments: usize,
    pub staff_remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl From<ComplaintView> for ComplaintExportRow {
    fn from(view: ComplaintView) -> Self {
        let c = view.complaint;
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            complaint_type: c.complaint_type,
            priority: c.priority,
            status: c.status,
            hostel_block: c.hostel_block,
            room_number: c.room_number,
            student: view.student,
            assigned_to: view.assignee,
            comments: view.comments.len(),
            staff_remarks: c.staff_remarks,
            created_at: c.created_at,
            updated_at: c.updated_at,
            resolved_at: c.resolved_at,
        }
    }
}

/// Runs the complaint workflow.
#[derive(Debug, Clone)]
pub struct ComplaintService {
    complaint_repo: Arc<ComplaintRepository>,
    user_repo: Arc<UserRepository>,
    room_repo: Arc<RoomRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl ComplaintService {
    /// Creates a new complaint service.
    pub fn new(
        complaint_repo: Arc<ComplaintRepository>,
        user_repo: Arc<UserRepository>,
        room_repo: Arc<RoomRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            complaint_repo,
            user_repo,
            room_repo,
            publisher,
        }
    }

    /// Files a complaint against the student's allocated room.
    pub async fn create_complaint(
        &self,
        ctx: &RequestContext,
        req: CreateComplaintRequest,
    ) -> AppResult<ComplaintView> {
        policy::complaint::create(&ctx.actor).into_result()?;

        let student = self
            .user_repo
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let room_id = student.room_id.ok_or_else(|| {
            AppError::validation("Student must be assigned to a room to file a complaint")
        })?;
        let room = self
            .room_repo
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        let complaint = self
            .complaint_repo
            .create(&CreateComplaint {
                student_id: student.id,
                title: req.title,
                description: req.description,
                complaint_type: req.complaint_type,
                priority: req.priority,
                hostel_block: room.block,
                room_number: room.room_number,
                images: req.images,
            })
            .await?;

        info!(
            complaint_id = %complaint.id,
            actor_id = %ctx.user_id(),
            kind = %complaint.complaint_type,
            "Complaint filed"
        );

        self.load(complaint.id).await
    }

    /// All complaints, newest first. Staff see complaints assigned to
    /// them or unassigned.
    pub async fn list_complaints(
        &self,
        ctx: &RequestContext,
        query: ComplaintQuery,
        page: PageRequest,
    ) -> AppResult<PageResponse<ComplaintView>> {
        policy::complaint::list_all(&ctx.actor).into_result()?;
        let filter = ComplaintFilter {
            status: query.status,
            complaint_type: query.complaint_type,
            visible_to_staff: policy::complaint::staff_scope(&ctx.actor),
            ..Default::default()
        };
        self.complaint_repo.find_page(&filter, &page).await
    }

    /// Complaints filed by the caller.
    pub async fn my_complaints(&self, ctx: &RequestContext) -> AppResult<Vec<ComplaintView>> {
        let filter = ComplaintFilter {
            student_id: Some(ctx.user_id()),
            ..Default::default()
        };
        self.complaint_repo.find_matching(&filter, None).await
    }

    /// Complaints in one status.
    pub async fn complaints_by_status(
        &self,
        ctx: &RequestContext,
        status: ComplaintStatus,
    ) -> AppResult<Vec<ComplaintView>> {
        policy::complaint::list_all(&ctx.actor).into_result()?;
        let filter = ComplaintFilter {
            status: Some(status),
            visible_to_staff: policy::complaint::staff_scope(&ctx.actor),
            ..Default::default()
        };
        self.complaint_repo.find_matching(&filter, None).await
    }

    /// Complaints raised from one room, identified by block and number.
    pub async fn complaints_by_room(
        &self,
        ctx: &RequestContext,
        block: &str,
        room_number: &str,
    ) -> AppResult<Vec<ComplaintView>> {
        policy::complaint::list_all(&ctx.actor).into_result()?;
        if !self.room_repo.exists_in_block(block, room_number).await? {
            return Err(AppError::not_found("Room not found"));
        }
        let filter = ComplaintFilter {
            hostel_block: Some(block.to_string()),
            room_number: Some(room_number.to_string()),
            visible_to_staff: policy::complaint::staff_scope(&ctx.actor),
            ..Default::default()
        };
        self.complaint_repo.find_matching(&filter, None).await
    }

    /// A single complaint with its comment thread.
    pub async fn get_complaint(
        &self,
        ctx: &RequestContext,
        complaint_id: Uuid,
    ) -> AppResult<ComplaintView> {
        let view = self.load(complaint_id).await?;
        policy::complaint::view(&ctx.actor, &view.complaint).into_result()?;
        Ok(view)
    }

    /// Edits a complaint.
    ///
    /// Students edit content while it is pending. Staff and admins move
    /// it through the workflow and set assignee, remarks and priority.
    pub async fn update_complaint(
        &self,
        ctx: &RequestContext,
        complaint_id: Uuid,
        req: UpdateComplaintRequest,
    ) -> AppResult<ComplaintView> {
        let mut complaint = self.find(complaint_id).await?;

        let change = if ctx.role() == UserRole::Student {
            policy::complaint::edit_content(&ctx.actor, &complaint).into_result()?;
            workflow::apply_content_edit(&mut complaint, req.content());
            None
        } else {
            policy::complaint::manage(&ctx.actor, &complaint).into_result()?;
            if let Some(staff_id) = req.assigned_to {
                self.require_staff(staff_id).await?;
            }
            workflow::apply_handling_edit(&mut complaint, req.handling(), Utc::now())?
        };

        let saved = self.complaint_repo.save(&complaint).await?;

        if let Some(change) = change {
            info!(
                complaint_id = %saved.id,
                actor_id = %ctx.user_id(),
                from = %change.from,
                to = %change.to,
                "Complaint status changed"
            );
            let event = ComplaintEvent::StatusChanged {
                complaint_id: saved.id,
                student_id: saved.student_id,
                title: saved.title.clone(),
                status: change.to.to_string(),
            };
            self.publisher
                .publish_or_log(DomainEvent::new(Some(ctx.user_id()), event.into()))
                .await;
        }

        self.load(saved.id).await
    }

    /// Assigns a staff member and puts the complaint in progress.
    pub async fn assign_complaint(
        &self,
        ctx: &RequestContext,
        complaint_id: Uuid,
        req: AssignComplaintRequest,
    ) -> AppResult<ComplaintView> {
        policy::complaint::assign(&ctx.actor).into_result()?;
        self.require_staff(req.staff_id).await?;

        let mut complaint = self.find(complaint_id).await?;
        let previous = workflow::assign(&mut complaint, req.staff_id, Utc::now());
        if previous == ComplaintStatus::Resolved {
            warn!(
                complaint_id = %complaint.id,
                actor_id = %ctx.user_id(),
                "Reopening a resolved complaint by assignment"
            );
        }
        let saved = self.complaint_repo.save(&complaint).await?;

        info!(
            complaint_id = %saved.id,
            actor_id = %ctx.user_id(),
            staff_id = %req.staff_id,
            from = %previous,
            "Complaint assigned"
        );

        let event = ComplaintEvent::Assigned {
            complaint_id: saved.id,
            student_id: saved.student_id,
            staff_id: req.staff_id,
            title: saved.title.clone(),
        };
        self.publisher
            .publish_or_log(DomainEvent::new(Some(ctx.user_id()), event.into()))
            .await;

        self.load(saved.id).await
    }

    /// Deletes a complaint and its comments.
    pub async fn delete_complaint(&self, ctx: &RequestContext, complaint_id: Uuid) -> AppResult<()> {
        let complaint = self.find(complaint_id).await?;
        policy::complaint::delete(&ctx.actor, &complaint).into_result()?;
        self.complaint_repo.delete(complaint_id).await?;
        info!(complaint_id = %complaint_id, actor_id = %ctx.user_id(), "Complaint deleted");
        Ok(())
    }

    /// Adds a comment and returns it with its author's name.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        complaint_id: Uuid,
        req: CreateCommentRequest,
    ) -> AppResult<CommentView> {
        let complaint = self.find(complaint_id).await?;
        policy::complaint::comment(&ctx.actor, &complaint).into_result()?;

        let comment = self
            .complaint_repo
            .insert_comment(complaint.id, ctx.user_id(), ctx.role(), &req.text)
            .await?;
        Ok(CommentView {
            comment,
            author_name: ctx.name.clone(),
        })
    }

    /// Removes a comment. Only its author or an admin may.
    pub async fn delete_comment(
        &self,
        ctx: &RequestContext,
        complaint_id: Uuid,
        comment_id: Uuid,
    ) -> AppResult<()> {
        self.find(complaint_id).await?;
        let comment = self
            .complaint_repo
            .find_comment(complaint_id, comment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found"))?;
        policy::complaint::delete_comment(&ctx.actor, comment.author_id).into_result()?;
        self.complaint_repo.delete_comment(comment.id).await?;
        Ok(())
    }

    /// Aggregate statistics. Staff only see complaints assigned to them.
    pub async fn complaint_stats(
        &self,
        ctx: &RequestContext,
        block: Option<String>,
    ) -> AppResult<ComplaintStats> {
        policy::complaint::list_all(&ctx.actor).into_result()?;
        let filter = ComplaintFilter {
            hostel_block: block,
            assigned_to: (ctx.role() == UserRole::Staff).then_some(ctx.user_id()),
            ..Default::default()
        };
        let rows = self.complaint_repo.find_stat_rows(&filter).await?;
        Ok(ComplaintStats::compute(&rows, Utc::now()))
    }

    /// Flattened rows for export. Admin only.
    pub async fn export_complaints(
        &self,
        ctx: &RequestContext,
        query: ExportQuery,
    ) -> AppResult<Vec<ComplaintExportRow>> {
        policy::complaint::export(&ctx.actor).into_result()?;
        let (created_from, created_to) = match (query.start_date, query.end_date) {
            (Some(from), Some(to)) => (Some(from), Some(to)),
            _ => (None, None),
        };
        let filter = ComplaintFilter {
            status: query.status,
            complaint_type: query.complaint_type,
            priority: query.priority,
            hostel_block: query.block,
            created_from,
            created_to,
            ..Default::default()
        };
        let views = self.complaint_repo.find_matching(&filter, None).await?;
        Ok(views.into_iter().map(ComplaintExportRow::from).collect())
    }

    async fn require_staff(&self, staff_id: Uuid) -> AppResult<()> {
        match self.user_repo.find_by_id(staff_id).await? {
            Some(user) if user.role == UserRole::Staff => Ok(()),
            _ => Err(AppError::not_found("Staff not found")),
        }
    }

    async fn find(&self, complaint_id: Uuid) -> AppResult<Complaint> {
        self.complaint_repo
            .find_by_id(complaint_id)
            .await?
            .ok_or_else(|| AppError::not_found("Complaint not found"))
    }

    async fn load(&self, complaint_id: Uuid) -> AppResult<ComplaintView> {
        self.complaint_repo
            .find_view_by_id(complaint_id)
            .await?
            .ok_or_else(|| AppError::not_found("Complaint not found"))
    }
}
