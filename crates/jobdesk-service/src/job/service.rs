//! Job registry — posting, updating, deleting, and listing jobs.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use jobdesk_auth::gate::{Action, RoleGate};
use jobdesk_core::error::AppError;
use jobdesk_database::repositories::JobStore;
use jobdesk_entity::job::{CreateJob, Job, JobPatch};

use crate::context::RequestContext;

/// Owns the Job entity lifecycle. Mutation is scoped to the posting
/// employer: the role gate runs first, then an explicit
/// `posted_by == caller` ownership check on update and delete.
#[derive(Clone)]
pub struct JobService {
    /// Job store.
    jobs: Arc<dyn JobStore>,
    /// Role gate.
    gate: Arc<RoleGate>,
}

impl std::fmt::Debug for JobService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobService").finish()
    }
}

impl JobService {
    /// Creates a new job service.
    pub fn new(jobs: Arc<dyn JobStore>, gate: Arc<RoleGate>) -> Self {
        Self { jobs, gate }
    }

    /// Posts a new job owned by the caller.
    pub async fn post(&self, ctx: &RequestContext, create: CreateJob) -> Result<Job, AppError> {
        self.gate.authorize(ctx.role, Action::PostJob)?;
        create.validate()?;

        let job = self.jobs.insert(ctx.user_id, create).await?;
        info!(job_id = %job.id, posted_by = %ctx.user_id, "Job posted");
        Ok(job)
    }

    /// Updates an owned job.
    ///
    /// Existence is checked before anything about the patch: a missing job
    /// is `NotFound` regardless of the patch contents. A job owned by a
    /// different employer is `Forbidden` even though the role gate passed.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        job_id: Uuid,
        patch: JobPatch,
    ) -> Result<Job, AppError> {
        self.gate.authorize(ctx.role, Action::UpdateJob)?;

        let mut job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;

        if job.posted_by != ctx.user_id {
            return Err(AppError::forbidden("You do not own this job"));
        }

        patch.apply_to(&mut job)?;
        let job = self.jobs.update(&job).await?;
        info!(job_id = %job.id, "Job updated");
        Ok(job)
    }

    /// Deletes an owned job.
    ///
    /// The store delete is scoped by `(id, owner)` atomically; the
    /// existence lookup beforehand only distinguishes `NotFound` from
    /// `Forbidden` for the caller.
    pub async fn delete(&self, ctx: &RequestContext, job_id: Uuid) -> Result<(), AppError> {
        self.gate.authorize(ctx.role, Action::DeleteJob)?;

        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;

        if job.posted_by != ctx.user_id {
            return Err(AppError::forbidden("You do not own this job"));
        }

        let removed = self.jobs.delete_owned(job_id, ctx.user_id).await?;
        if removed == 0 {
            // Raced with another delete; the record is gone either way.
            return Err(AppError::not_found("Job not found"));
        }
        info!(job_id = %job_id, "Job deleted");
        Ok(())
    }

    /// Lists all non-expired jobs. Open to either role.
    pub async fn list_active(&self) -> Result<Vec<Job>, AppError> {
        self.jobs.find_active().await
    }

    /// Lists the caller's own jobs, regardless of expiry.
    pub async fn list_mine(&self, ctx: &RequestContext) -> Result<Vec<Job>, AppError> {
        self.gate.authorize(ctx.role, Action::ListOwnJobs)?;
        self.jobs.find_by_owner(ctx.user_id).await
    }

    /// Fetches a single job by id. Open to either role.
    pub async fn get(&self, job_id: Uuid) -> Result<Job, AppError> {
        self.jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))
    }
}
