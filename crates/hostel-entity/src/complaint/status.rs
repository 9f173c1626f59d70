//! Complaint status and its transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a complaint.
///
/// ```text
/// pending ──► in-progress ──► resolved
///                  └────────► rejected
/// ```
///
/// Staff assignment always moves a complaint to `in-progress`, from any
/// state; that path does not go through [`ComplaintStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "complaint_status")]
pub enum ComplaintStatus {
    #[serde(rename = "pending")]
    #[sqlx(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    #[sqlx(rename = "in-progress")]
    InProgress,
    #[serde(rename = "resolved")]
    #[sqlx(rename = "resolved")]
    Resolved,
    #[serde(rename = "rejected")]
    #[sqlx(rename = "rejected")]
    Rejected,
}

impl ComplaintStatus {
    /// Every status, in workflow order.
    pub const ALL: [ComplaintStatus; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Resolved,
        Self::Rejected,
    ];

    /// Whether a direct status edit may move `self` to `next`.
    ///
    /// Re-submitting the current status is accepted as a no-op so that
    /// remark or priority edits can carry the unchanged status along.
    pub fn can_transition_to(&self, next: ComplaintStatus) -> bool {
        *self == next
            || matches!(
                (self, next),
                (Self::Pending, Self::InProgress)
                    | (Self::InProgress, Self::Resolved)
                    | (Self::InProgress, Self::Rejected)
            )
    }

    /// Check if the complaint is closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ComplaintStatus::*;

    #[test]
    fn test_workflow_edges() {
        assert!(Pending.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Resolved));
        assert!(InProgress.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Resolved));
        assert!(!Resolved.can_transition_to(Pending));
        assert!(!Rejected.can_transition_to(InProgress));
    }

    #[test]
    fn test_same_status_is_noop() {
        for s in super::ComplaintStatus::ALL {
            assert!(s.can_transition_to(s));
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&InProgress).unwrap(), "\"in-progress\"");
        let parsed: super::ComplaintStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(parsed, Resolved);
    }
}
