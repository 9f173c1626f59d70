//! Complaint access rules.

use uuid::Uuid;

use hostel_entity::complaint::{Complaint, ComplaintStatus};
use hostel_entity::user::UserRole;

use super::{Actor, Decision, DenyReason, require_roles};

const HANDLERS: &[UserRole] = &[UserRole::Admin, UserRole::Staff];

/// Listing every complaint, statistics included.
pub fn list_all(actor: &Actor) -> Decision {
    require_roles(actor, HANDLERS)
}

/// The assignee filter applied to a staff member's listings: complaints
/// assigned to them or to nobody. `None` means unrestricted.
pub fn staff_scope(actor: &Actor) -> Option<Uuid> {
    (actor.role == UserRole::Staff).then_some(actor.id)
}

fn staff_may_handle(actor: &Actor, complaint: &Complaint) -> bool {
    actor.role == UserRole::Staff
        && (complaint.assigned_to.is_none() || complaint.is_assigned_to(actor.id))
}

/// Admin, the filing student, or staff who may handle it.
pub fn view(actor: &Actor, complaint: &Complaint) -> Decision {
    Decision::allow_if(
        actor.is_admin() || complaint.is_filed_by(actor.id) || staff_may_handle(actor, complaint),
        DenyReason::NotComplaintParty,
    )
}

/// Only students file complaints.
pub fn create(actor: &Actor) -> Decision {
    require_roles(actor, &[UserRole::Student])
}

/// Title, description, type, priority and images: the filing student
/// while the complaint is still pending.
pub fn edit_content(actor: &Actor, complaint: &Complaint) -> Decision {
    Decision::allow_if(complaint.is_filed_by(actor.id), DenyReason::NotComplaintParty).and(|| {
        Decision::allow_if(
            complaint.status == ComplaintStatus::Pending,
            DenyReason::ComplaintProcessed,
        )
    })
}

/// Status, assignee, remarks and priority: admins, or staff on
/// complaints assigned to them or unassigned.
pub fn manage(actor: &Actor, complaint: &Complaint) -> Decision {
    require_roles(actor, HANDLERS).and(|| {
        Decision::allow_if(
            actor.is_admin() || staff_may_handle(actor, complaint),
            DenyReason::NotAssignedStaff,
        )
    })
}

/// Assigning a staff member is open to any handler.
pub fn assign(actor: &Actor) -> Decision {
    require_roles(actor, HANDLERS)
}

/// Admin, or the filing student while pending.
pub fn delete(actor: &Actor, complaint: &Complaint) -> Decision {
    if actor.is_admin() {
        return Decision::Allow;
    }
    edit_content(actor, complaint)
}

/// Admin, the assigned staff member, or the filing student.
pub fn comment(actor: &Actor, complaint: &Complaint) -> Decision {
    Decision::allow_if(
        actor.is_admin()
            || complaint.is_filed_by(actor.id)
            || (actor.role == UserRole::Staff && complaint.is_assigned_to(actor.id)),
        DenyReason::NotComplaintParty,
    )
}

/// The comment's author or an admin.
pub fn delete_comment(actor: &Actor, author_id: Uuid) -> Decision {
    Decision::allow_if(
        actor.is_admin() || actor.is(author_id),
        DenyReason::NotCommentAuthor,
    )
}

/// Bulk export is admin only.
pub fn export(actor: &Actor) -> Decision {
    super::admin_only(actor)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use hostel_entity::complaint::{ComplaintPriority, ComplaintType};

    use super::*;

    fn complaint(student_id: Uuid, assigned_to: Option<Uuid>, status: ComplaintStatus) -> Complaint {
        Complaint {
            id: Uuid::new_v4(),
            student_id,
            title: "Leaking tap".to_string(),
            description: "The tap drips all night".to_string(),
            complaint_type: ComplaintType::Plumbing,
            priority: ComplaintPriority::Medium,
            status,
            hostel_block: "A".to_string(),
            room_number: "101".to_string(),
            assigned_to,
            staff_remarks: None,
            images: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            resolved_at: None,
        }
    }

    fn actor(role: UserRole) -> Actor {
        Actor::new(Uuid::new_v4(), role)
    }

    #[test]
    fn test_unassigned_staff_cannot_update_others_complaint() {
        let x = actor(UserRole::Staff);
        let y = actor(UserRole::Staff);
        let c = complaint(Uuid::new_v4(), Some(y.id), ComplaintStatus::InProgress);

        assert_eq!(manage(&x, &c).reason(), Some(DenyReason::NotAssignedStaff));
        assert!(manage(&y, &c).is_allowed());
        assert!(manage(&actor(UserRole::Admin), &c).is_allowed());
    }

    #[test]
    fn test_staff_may_handle_unassigned() {
        let staff = actor(UserRole::Staff);
        let c = complaint(Uuid::new_v4(), None, ComplaintStatus::Pending);
        assert!(manage(&staff, &c).is_allowed());
        assert!(view(&staff, &c).is_allowed());
        // commenting needs an actual assignment
        assert!(!comment(&staff, &c).is_allowed());
    }

    #[test]
    fn test_students_cannot_manage() {
        let student = actor(UserRole::Student);
        let c = complaint(student.id, None, ComplaintStatus::Pending);
        assert_eq!(manage(&student, &c).reason(), Some(DenyReason::RoleNotPermitted));
    }

    #[test]
    fn test_content_edits_only_while_pending() {
        let student = actor(UserRole::Student);
        let pending = complaint(student.id, None, ComplaintStatus::Pending);
        let started = complaint(student.id, None, ComplaintStatus::InProgress);

        assert!(edit_content(&student, &pending).is_allowed());
        assert_eq!(
            edit_content(&student, &started).reason(),
            Some(DenyReason::ComplaintProcessed)
        );
        assert_eq!(
            edit_content(&actor(UserRole::Student), &pending).reason(),
            Some(DenyReason::NotComplaintParty)
        );
    }

    #[test]
    fn test_delete_rules() {
        let student = actor(UserRole::Student);
        let admin = actor(UserRole::Admin);
        let started = complaint(student.id, None, ComplaintStatus::InProgress);

        assert!(!delete(&student, &started).is_allowed());
        assert!(delete(&admin, &started).is_allowed());
        assert!(delete(&student, &complaint(student.id, None, ComplaintStatus::Pending)).is_allowed());
    }

    #[test]
    fn test_view_and_comment_parties() {
        let student = actor(UserRole::Student);
        let staff = actor(UserRole::Staff);
        let c = complaint(student.id, Some(staff.id), ComplaintStatus::InProgress);

        assert!(view(&student, &c).is_allowed());
        assert!(comment(&student, &c).is_allowed());
        assert!(comment(&staff, &c).is_allowed());
        assert!(!view(&actor(UserRole::Student), &c).is_allowed());
        assert!(!view(&actor(UserRole::Owner), &c).is_allowed());
    }

    #[test]
    fn test_staff_scope() {
        let staff = actor(UserRole::Staff);
        assert_eq!(staff_scope(&staff), Some(staff.id));
        assert_eq!(staff_scope(&actor(UserRole::Admin)), None);
        assert!(!list_all(&actor(UserRole::Student)).is_allowed());
    }

    #[test]
    fn test_comment_deletion() {
        let author = actor(UserRole::Staff);
        assert!(delete_comment(&author, author.id).is_allowed());
        assert!(delete_comment(&actor(UserRole::Admin), author.id).is_allowed());
        assert!(!delete_comment(&actor(UserRole::Student), author.id).is_allowed());
    }
}
