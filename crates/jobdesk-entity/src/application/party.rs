//! Participant parties carried by an application.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::Role;

/// One of the two user references carried by an application, snapshotted at
/// creation time. The role is fixed by construction: the applicant party is
/// always a job seeker and the employer party always an employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// The referenced user's id.
    pub user_id: Uuid,
    /// The party's role on the application.
    pub role: Role,
}

impl Party {
    /// The submitting job seeker's side of an application.
    pub fn applicant(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: Role::JobSeeker,
        }
    }

    /// The receiving employer's side of an application, derived from the
    /// job's `posted_by` at submission time.
    pub fn employer(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: Role::Employer,
        }
    }
}
