//! Request context carrying the authenticated actor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hostel_auth::policy::Actor;
use hostel_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the API extractors and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user.
    pub actor: Actor,
    /// Display name from the token.
    pub name: String,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        user_id: Uuid,
        role: UserRole,
        name: String,
        ip_address: String,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            actor: Actor::new(user_id, role),
            name,
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }

    /// The acting user's ID.
    pub fn user_id(&self) -> Uuid {
        self.actor.id
    }

    /// The acting user's role.
    pub fn role(&self) -> UserRole {
        self.actor.role
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.actor.is_admin()
    }
}
