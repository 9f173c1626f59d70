//! In-memory complaint edits. Every status change goes through
//! [`set_status`], which keeps `resolved_at` set exactly while the
//! complaint is resolved.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_entity::complaint::{Complaint, ComplaintPriority, ComplaintStatus, ComplaintType};

/// Fields the filing student may change while the complaint is pending.
#[derive(Debug, Clone, Default)]
pub struct ContentEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub complaint_type: Option<ComplaintType>,
    pub priority: Option<ComplaintPriority>,
    pub images: Option<Vec<String>>,
}

/// Fields staff and admins may change.
#[derive(Debug, Clone, Default)]
pub struct HandlingEdit {
    pub status: Option<ComplaintStatus>,
    pub assigned_to: Option<Uuid>,
    pub staff_remarks: Option<String>,
    pub priority: Option<ComplaintPriority>,
}

/// A status change that happened while applying an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: ComplaintStatus,
    pub to: ComplaintStatus,
}

/// Move to `next`, stamping `resolved_at` on entry to resolved and
/// clearing it on exit.
pub fn set_status(complaint: &mut Complaint, next: ComplaintStatus, now: DateTime<Utc>) {
    if next == ComplaintStatus::Resolved && complaint.status != ComplaintStatus::Resolved {
        complaint.resolved_at = Some(now);
    } else if next != ComplaintStatus::Resolved {
        complaint.resolved_at = None;
    }
    complaint.status = next;
}

pub fn apply_content_edit(complaint: &mut Complaint, edit: ContentEdit) {
    if let Some(title) = edit.title {
        complaint.title = title;
    }
    if let Some(description) = edit.description {
        complaint.description = description;
    }
    if let Some(kind) = edit.complaint_type {
        complaint.complaint_type = kind;
    }
    if let Some(priority) = edit.priority {
        complaint.priority = priority;
    }
    if let Some(images) = edit.images {
        complaint.images = images;
    }
}

/// Apply a staff/admin edit. Status moves must follow the workflow;
/// anything else is a conflict and leaves the complaint untouched.
pub fn apply_handling_edit(
    complaint: &mut Complaint,
    edit: HandlingEdit,
    now: DateTime<Utc>,
) -> AppResult<Option<StatusChange>> {
    let mut change = None;
    if let Some(next) = edit.status {
        let from = complaint.status;
        if !from.can_transition_to(next) {
            return Err(AppError::conflict(format!(
                "Cannot move complaint from {from} to {next}"
            )));
        }
        if from != next {
            set_status(complaint, next, now);
            change = Some(StatusChange { from, to: next });
        }
    }
    if let Some(staff_id) = edit.assigned_to {
        complaint.assigned_to = Some(staff_id);
    }
    if let Some(remarks) = edit.staff_remarks {
        complaint.staff_remarks = Some(remarks);
    }
    if let Some(priority) = edit.priority {
        complaint.priority = priority;
    }
    Ok(change)
}

/// Hand the complaint to a staff member and put it in progress.
///
/// Returns the status it had before, which callers use to flag the
/// reopening of a resolved complaint.
pub fn assign(complaint: &mut Complaint, staff_id: Uuid, now: DateTime<Utc>) -> ComplaintStatus {
    let previous = complaint.status;
    complaint.assigned_to = Some(staff_id);
    set_status(complaint, ComplaintStatus::InProgress, now);
    previous
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn complaint(status: ComplaintStatus) -> Complaint {
        let created = Utc::now() - Duration::days(3);
        Complaint {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            title: "Broken fan".to_string(),
            description: "Ceiling fan stopped".to_string(),
            complaint_type: ComplaintType::Electrical,
            priority: ComplaintPriority::Medium,
            status,
            hostel_block: "B".to_string(),
            room_number: "204".to_string(),
            assigned_to: None,
            staff_remarks: None,
            images: vec![],
            created_at: created,
            updated_at: created,
            resolved_at: None,
        }
    }

    #[test]
    fn test_resolving_stamps_resolved_at() {
        let mut c = complaint(ComplaintStatus::InProgress);
        let now = Utc::now();
        let change = apply_handling_edit(
            &mut c,
            HandlingEdit {
                status: Some(ComplaintStatus::Resolved),
                staff_remarks: Some("Replaced the capacitor".to_string()),
                ..Default::default()
            },
            now,
        )
        .unwrap();

        assert_eq!(
            change,
            Some(StatusChange {
                from: ComplaintStatus::InProgress,
                to: ComplaintStatus::Resolved
            })
        );
        assert_eq!(c.resolved_at, Some(now));
        assert_eq!(c.staff_remarks.as_deref(), Some("Replaced the capacitor"));
    }

    #[test]
    fn test_skipping_a_step_is_a_conflict() {
        let mut c = complaint(ComplaintStatus::Pending);
        let err = apply_handling_edit(
            &mut c,
            HandlingEdit {
                status: Some(ComplaintStatus::Resolved),
                priority: Some(ComplaintPriority::Urgent),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap_err();

        assert_eq!(err.kind, hostel_core::error::ErrorKind::Conflict);
        assert_eq!(c.status, ComplaintStatus::Pending);
        assert_eq!(c.priority, ComplaintPriority::Medium);
    }

    #[test]
    fn test_same_status_is_not_a_change() {
        let mut c = complaint(ComplaintStatus::InProgress);
        let change = apply_handling_edit(
            &mut c,
            HandlingEdit {
                status: Some(ComplaintStatus::InProgress),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(change, None);
    }

    #[test]
    fn test_assigning_reopens_and_clears_resolution() {
        let mut c = complaint(ComplaintStatus::Resolved);
        c.resolved_at = Some(Utc::now());
        let staff = Uuid::new_v4();

        let previous = assign(&mut c, staff, Utc::now());

        assert_eq!(previous, ComplaintStatus::Resolved);
        assert_eq!(c.status, ComplaintStatus::InProgress);
        assert_eq!(c.assigned_to, Some(staff));
        assert!(c.resolved_at.is_none());
    }

    #[test]
    fn test_content_edit_replaces_images() {
        let mut c = complaint(ComplaintStatus::Pending);
        apply_content_edit(
            &mut c,
            ContentEdit {
                description: Some("Fan makes a grinding noise".to_string()),
                images: Some(vec!["fan.jpg".to_string()]),
                ..Default::default()
            },
        );
        assert_eq!(c.title, "Broken fan");
        assert_eq!(c.description, "Fan makes a grinding noise");
        assert_eq!(c.images, vec!["fan.jpg".to_string()]);
    }
}
