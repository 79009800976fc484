//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobdesk_entity::user::{Role, User};

/// Context for the current authenticated request.
///
/// Resolved from a verified session token by the transport layer and passed
/// into service methods so that every operation knows *who* is acting and
/// with *which* role. Requests are otherwise stateless.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role.
    pub role: Role,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an employer.
    pub fn is_employer(&self) -> bool {
        self.role.is_employer()
    }

    /// Returns whether the current user is a job seeker.
    pub fn is_job_seeker(&self) -> bool {
        self.role.is_job_seeker()
    }
}

impl From<&User> for RequestContext {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role)
    }
}
