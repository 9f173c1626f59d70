//! Policy decisions and denial reasons.

use std::fmt;

use serde_json::json;

use hostel_core::error::AppError;
use hostel_core::result::AppResult;

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    AdminOnly,
    RoleNotPermitted,
    NotHostelOwner,
    PendingVerification,
    NotBookingParty,
    NotBookingCreator,
    StatusNotPermitted,
    NotComplaintParty,
    ComplaintProcessed,
    NotAssignedStaff,
    NotCommentAuthor,
    NoCompletedStay,
    NotReviewAuthor,
}

impl DenyReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AdminOnly => "admin_only",
            Self::RoleNotPermitted => "role_not_permitted",
            Self::NotHostelOwner => "not_hostel_owner",
            Self::PendingVerification => "pending_verification",
            Self::NotBookingParty => "not_booking_party",
            Self::NotBookingCreator => "not_booking_creator",
            Self::StatusNotPermitted => "status_not_permitted",
            Self::NotComplaintParty => "not_complaint_party",
            Self::ComplaintProcessed => "complaint_processed",
            Self::NotAssignedStaff => "not_assigned_staff",
            Self::NotCommentAuthor => "not_comment_author",
            Self::NoCompletedStay => "no_completed_stay",
            Self::NotReviewAuthor => "not_review_author",
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::AdminOnly => "Only administrators can perform this action",
            Self::RoleNotPermitted => "Your role is not permitted to perform this action",
            Self::NotHostelOwner => "Not authorized to manage this hostel",
            Self::PendingVerification => "This hostel is pending verification",
            Self::NotBookingParty => "Not authorized to access this booking",
            Self::NotBookingCreator => "Only the guest who made the booking can do this",
            Self::StatusNotPermitted => "Not authorized to set this booking status",
            Self::NotComplaintParty => "Not authorized to access this complaint",
            Self::ComplaintProcessed => "Cannot change complaint once it has been processed",
            Self::NotAssignedStaff => "Complaint is assigned to another staff member",
            Self::NotCommentAuthor => "Not authorized to delete this comment",
            Self::NoCompletedStay => "You can only review hostels where you have completed a stay",
            Self::NotReviewAuthor => "Not authorized to modify this review",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    /// `Allow` when `condition` holds, otherwise `Deny(reason)`.
    pub fn allow_if(condition: bool, reason: DenyReason) -> Self {
        if condition {
            Self::Allow
        } else {
            Self::Deny(reason)
        }
    }

    /// Whether the request may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// First denial wins.
    pub fn and(self, other: impl FnOnce() -> Decision) -> Decision {
        match self {
            Self::Allow => other(),
            deny => deny,
        }
    }

    /// The denial reason, if any.
    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allow => None,
            Self::Deny(reason) => Some(*reason),
        }
    }

    /// Convert into a result; denials become `Forbidden` carrying the
    /// reason code in `details`.
    pub fn into_result(self) -> AppResult<()> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(AppError::forbidden(reason.message())
                .with_details(json!({ "reason": reason.code() }))),
        }
    }
}

#[cfg(test)]
mod tests {
    use hostel_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_deny_maps_to_forbidden_with_code() {
        let err = Decision::Deny(DenyReason::AdminOnly).into_result().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.details, Some(json!({ "reason": "admin_only" })));
    }

    #[test]
    fn test_and_short_circuits() {
        let d = Decision::Deny(DenyReason::NotHostelOwner)
            .and(|| Decision::Deny(DenyReason::AdminOnly));
        assert_eq!(d.reason(), Some(DenyReason::NotHostelOwner));
        assert!(Decision::Allow.and(|| Decision::Allow).is_allowed());
    }
}
