//! The fixed set of gated actions and their required roles.

use serde::{Deserialize, Serialize};

use jobdesk_entity::user::Role;

/// Every action the core exposes that is subject to role gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create a new job posting.
    PostJob,
    /// Update an owned job posting.
    UpdateJob,
    /// Delete an owned job posting.
    DeleteJob,
    /// List the caller's own postings.
    ListOwnJobs,
    /// Submit an application to a job.
    SubmitApplication,
    /// Delete an owned application.
    DeleteApplication,
    /// List applications where the caller is the employer party.
    ListReceivedApplications,
    /// List applications where the caller is the applicant party.
    ListSubmittedApplications,
    /// Read a single job posting.
    ReadJob,
    /// Browse all non-expired job postings.
    BrowseJobs,
}

impl Action {
    /// The role an identity must hold to perform this action, or `None`
    /// when either role may perform it.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::PostJob | Self::UpdateJob | Self::DeleteJob | Self::ListOwnJobs => {
                Some(Role::Employer)
            }
            Self::ListReceivedApplications => Some(Role::Employer),
            Self::SubmitApplication
            | Self::DeleteApplication
            | Self::ListSubmittedApplications => Some(Role::JobSeeker),
            Self::ReadJob | Self::BrowseJobs => None,
        }
    }
}
