//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two mutually-exclusive roles on the platform.
///
/// The role is fixed at registration and never changes afterwards; every
/// other value is rejected at the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Posts jobs and receives applications.
    Employer,
    /// Browses jobs and submits applications.
    JobSeeker,
}

impl Role {
    /// Return the role as its canonical string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::JobSeeker => "job_seeker",
        }
    }

    /// Whether this role is the employer role.
    pub fn is_employer(&self) -> bool {
        matches!(self, Self::Employer)
    }

    /// Whether this role is the job-seeker role.
    pub fn is_job_seeker(&self) -> bool {
        matches!(self, Self::JobSeeker)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = jobdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "employer" => Ok(Self::Employer),
            "job_seeker" | "jobseeker" => Ok(Self::JobSeeker),
            _ => Err(jobdesk_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: employer, job_seeker"
            ))),
        }
    }
}
