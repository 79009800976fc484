//! Application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use jobdesk_core::AppError;
use jobdesk_core::traits::BlobRef;

use super::party::Party;

/// Reference to an uploaded resume in the external blob store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ResumeRef {
    /// Store-assigned object identifier.
    pub storage_id: String,
    /// Publicly reachable URL.
    pub url: String,
}

impl From<BlobRef> for ResumeRef {
    fn from(blob: BlobRef) -> Self {
        Self {
            storage_id: blob.id,
            url: blob.url,
        }
    }
}

/// A submitted job application linking a job seeker to an employer.
///
/// Both party bindings are snapshots taken at submission time: if the job's
/// ownership later changes, historical applications keep the original
/// employer binding.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    /// Unique application identifier.
    pub id: Uuid,
    /// Applicant's stated name.
    pub name: String,
    /// Applicant's contact email.
    pub email: String,
    /// Cover letter text.
    pub cover_letter: String,
    /// Applicant's contact phone.
    pub phone: String,
    /// Applicant's postal address.
    pub address: String,
    /// Submitting job seeker's user id.
    pub applicant_id: Uuid,
    /// Receiving employer's user id, derived from the job at submission.
    pub employer_id: Uuid,
    /// Uploaded resume reference.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub resume: ResumeRef,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// The applicant party (always a job seeker).
    pub fn applicant(&self) -> Party {
        Party::applicant(self.applicant_id)
    }

    /// The employer party (always an employer).
    pub fn employer(&self) -> Party {
        Party::employer(self.employer_id)
    }
}

/// Textual fields supplied by the job seeker when submitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitApplication {
    /// Applicant's stated name.
    pub name: String,
    /// Applicant's contact email.
    pub email: String,
    /// Cover letter text.
    pub cover_letter: String,
    /// Applicant's contact phone.
    pub phone: String,
    /// Applicant's postal address.
    pub address: String,
    /// The job being applied to. Absent is a validation error.
    pub job_id: Option<Uuid>,
}

impl SubmitApplication {
    /// Validates that every textual field is present.
    pub fn validate_fields(&self) -> Result<(), AppError> {
        let fields = [
            &self.name,
            &self.email,
            &self.cover_letter,
            &self.phone,
            &self.address,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(AppError::validation("Please fill all fields"));
        }
        Ok(())
    }
}

/// Data required to persist a new application record. Both parties and the
/// resume reference have already been resolved by the workflow.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    /// Applicant's stated name.
    pub name: String,
    /// Applicant's contact email.
    pub email: String,
    /// Cover letter text.
    pub cover_letter: String,
    /// Applicant's contact phone.
    pub phone: String,
    /// Applicant's postal address.
    pub address: String,
    /// The applicant party.
    pub applicant: Party,
    /// The employer party.
    pub employer: Party,
    /// Uploaded resume reference.
    pub resume: ResumeRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_fields_all_required() {
        let mut submit = SubmitApplication {
            name: "Nadia Rahman".into(),
            email: "nadia@example.com".into(),
            cover_letter: "I would like to apply.".into(),
            phone: "555-0144".into(),
            address: "12 Canal St".into(),
            job_id: Some(Uuid::new_v4()),
        };
        assert!(submit.validate_fields().is_ok());

        submit.cover_letter = " ".into();
        assert!(submit.validate_fields().is_err());
    }

    #[test]
    fn parties_reflect_snapshot_columns() {
        let applicant = Uuid::new_v4();
        let employer = Uuid::new_v4();
        let app = Application {
            id: Uuid::new_v4(),
            name: "Nadia Rahman".into(),
            email: "nadia@example.com".into(),
            cover_letter: "cover".into(),
            phone: "555-0144".into(),
            address: "12 Canal St".into(),
            applicant_id: applicant,
            employer_id: employer,
            resume: ResumeRef {
                storage_id: "blob-1".into(),
                url: "http://files/blob-1.png".into(),
            },
            created_at: Utc::now(),
        };
        assert_eq!(app.applicant(), Party::applicant(applicant));
        assert_eq!(app.employer(), Party::employer(employer));
    }
}
