//! Application workflow — submission, role-scoped listing, and deletion.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use jobdesk_auth::gate::{Action, RoleGate};
use jobdesk_core::error::AppError;
use jobdesk_core::traits::BlobStorage;
use jobdesk_database::repositories::{ApplicationStore, JobStore};
use jobdesk_entity::application::{Application, CreateApplication, Party, SubmitApplication};

use crate::context::RequestContext;

/// Media types accepted for resume uploads.
const ACCEPTED_RESUME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// An in-memory resume file as received from the caller.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    /// Original file name.
    pub file_name: String,
    /// Declared media type.
    pub mime_type: String,
    /// File content.
    pub data: Bytes,
}

/// Runs the application workflow over the job store, the application store,
/// and the external resume blob store.
#[derive(Clone)]
pub struct ApplicationService {
    /// Application store.
    applications: Arc<dyn ApplicationStore>,
    /// Job store, consulted to resolve the employer party.
    jobs: Arc<dyn JobStore>,
    /// External resume store.
    blobs: Arc<dyn BlobStorage>,
    /// Role gate.
    gate: Arc<RoleGate>,
}

impl std::fmt::Debug for ApplicationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationService").finish()
    }
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(
        applications: Arc<dyn ApplicationStore>,
        jobs: Arc<dyn JobStore>,
        blobs: Arc<dyn BlobStorage>,
        gate: Arc<RoleGate>,
    ) -> Self {
        Self {
            applications,
            jobs,
            blobs,
            gate,
        }
    }

    /// Submits an application to a job.
    ///
    /// Resume presence, media type, textual fields, and job resolution are
    /// all checked before the blob upload. A rejected submission never
    /// leaves an orphaned object in the external store.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        submit: SubmitApplication,
        resume: Option<ResumeUpload>,
    ) -> Result<Application, AppError> {
        self.gate.authorize(ctx.role, Action::SubmitApplication)?;

        let resume = resume.ok_or_else(|| AppError::validation("Resume file required"))?;
        if !ACCEPTED_RESUME_TYPES.contains(&resume.mime_type.as_str()) {
            return Err(AppError::validation(
                "Invalid file type. Please upload your resume in PNG, JPEG, or WEBP format",
            ));
        }

        submit.validate_fields()?;

        let job_id = submit
            .job_id
            .ok_or_else(|| AppError::validation("Please provide a job id"))?;
        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;

        let blob = self
            .blobs
            .upload(&resume.file_name, &resume.mime_type, resume.data)
            .await
            .map_err(|e| AppError::upstream(format!("Failed to upload resume: {e}")))?;
        if blob.id.is_empty() || blob.url.is_empty() {
            return Err(AppError::upstream(
                "Resume store returned an incomplete reference",
            ));
        }

        let application = self
            .applications
            .insert(CreateApplication {
                name: submit.name,
                email: submit.email,
                cover_letter: submit.cover_letter,
                phone: submit.phone,
                address: submit.address,
                applicant: Party::applicant(ctx.user_id),
                employer: Party::employer(job.posted_by),
                resume: blob.into(),
            })
            .await?;

        info!(
            application_id = %application.id,
            job_id = %job_id,
            applicant = %ctx.user_id,
            "Application submitted"
        );
        Ok(application)
    }

    /// Lists applications where the caller is the employer party.
    pub async fn list_for_employer(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Application>, AppError> {
        self.gate
            .authorize(ctx.role, Action::ListReceivedApplications)?;
        self.applications.find_by_employer(ctx.user_id).await
    }

    /// Lists applications where the caller is the applicant party.
    pub async fn list_for_applicant(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Application>, AppError> {
        self.gate
            .authorize(ctx.role, Action::ListSubmittedApplications)?;
        self.applications.find_by_applicant(ctx.user_id).await
    }

    /// Deletes one of the caller's own applications.
    ///
    /// The store delete filters by `(id, applicant)` atomically — never by
    /// id alone — so another seeker's application reads as `NotFound`.
    pub async fn delete_own(
        &self,
        ctx: &RequestContext,
        application_id: Uuid,
    ) -> Result<(), AppError> {
        self.gate.authorize(ctx.role, Action::DeleteApplication)?;

        let removed = self
            .applications
            .delete_owned(application_id, ctx.user_id)
            .await?;
        if removed == 0 {
            return Err(AppError::not_found("Application not found"));
        }
        info!(application_id = %application_id, "Application deleted");
        Ok(())
    }
}
