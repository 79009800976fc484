//! Job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use jobdesk_core::AppError;

use super::compensation::Compensation;

/// A job posting owned by the employer identified by `posted_by`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: Uuid,
    /// Job title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Country of the posting.
    pub country: String,
    /// City of the posting.
    pub city: String,
    /// Street-level location or address hint.
    pub location: String,
    /// Fixed salary, if the posting uses the fixed mode.
    pub fixed_salary: Option<i64>,
    /// Range lower bound, if the posting uses the ranged mode.
    pub salary_from: Option<i64>,
    /// Range upper bound, if the posting uses the ranged mode.
    pub salary_to: Option<i64>,
    /// Owning employer's user id.
    pub posted_by: Uuid,
    /// Whether the posting has expired and left the public listing.
    pub expired: bool,
    /// When the job was posted.
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Returns the posting's compensation mode.
    ///
    /// Stored rows always satisfy the exactly-one-mode invariant, so this
    /// only fails on a corrupted record.
    pub fn compensation(&self) -> Result<Compensation, AppError> {
        Compensation::from_parts(self.fixed_salary, self.salary_from, self.salary_to)
    }
}

/// Input for posting a new job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Job title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Country of the posting.
    pub country: String,
    /// City of the posting.
    pub city: String,
    /// Street-level location or address hint.
    pub location: String,
    /// Compensation mode, already validated as exactly-one by construction.
    pub compensation: Compensation,
}

impl CreateJob {
    /// Validates that every descriptive field is present.
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            &self.title,
            &self.description,
            &self.category,
            &self.country,
            &self.city,
            &self.location,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(AppError::validation("Please provide full job details"));
        }
        Ok(())
    }
}

/// Partial update for an existing job. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New country.
    pub country: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// Replacement compensation mode.
    pub compensation: Option<Compensation>,
    /// New expiry flag.
    pub expired: Option<bool>,
}

impl JobPatch {
    /// Applies the patch to a job in place, re-validating changed fields.
    pub fn apply_to(&self, job: &mut Job) -> Result<(), AppError> {
        let text_fields = [
            (&self.title, &mut job.title),
            (&self.description, &mut job.description),
            (&self.category, &mut job.category),
            (&self.country, &mut job.country),
            (&self.city, &mut job.city),
            (&self.location, &mut job.location),
        ];
        for (patch, field) in text_fields {
            if let Some(value) = patch {
                if value.trim().is_empty() {
                    return Err(AppError::validation("Job fields cannot be blank"));
                }
                *field = value.clone();
            }
        }
        if let Some(compensation) = self.compensation {
            let (fixed, from, to) = compensation.into_parts();
            job.fixed_salary = fixed;
            job.salary_from = from;
            job.salary_to = to;
        }
        if let Some(expired) = self.expired {
            job.expired = expired;
        }
        Ok(())
    }
}
