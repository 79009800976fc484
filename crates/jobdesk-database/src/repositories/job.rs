//! Job store trait and repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use jobdesk_core::error::{AppError, ErrorKind};
use jobdesk_core::result::AppResult;
use jobdesk_entity::job::{CreateJob, Job};

/// Persistence contract for job postings.
#[async_trait]
pub trait JobStore: Send + Sync + 'static {
    /// Persist a new posting owned by `owner_id`, not yet expired.
    async fn insert(&self, owner_id: Uuid, data: CreateJob) -> AppResult<Job>;

    /// Find a posting by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>>;

    /// All postings that have not expired, newest first.
    async fn find_active(&self) -> AppResult<Vec<Job>>;

    /// All postings owned by `owner_id`, regardless of expiry.
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Job>>;

    /// Write back a modified posting.
    async fn update(&self, job: &Job) -> AppResult<Job>;

    /// Delete a posting scoped by `(id, owner_id)` atomically.
    ///
    /// Returns the number of rows removed; zero means the posting does not
    /// exist or is not owned by the caller. Never deletes by id alone.
    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<u64>;
}

/// sqlx-backed job repository.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for JobRepository {
    async fn insert(&self, owner_id: Uuid, data: CreateJob) -> AppResult<Job> {
        let (fixed_salary, salary_from, salary_to) = data.compensation.into_parts();
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs \
             (id, title, description, category, country, city, location, \
              fixed_salary, salary_from, salary_to, posted_by, expired, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, FALSE, $12) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.country)
        .bind(&data.city)
        .bind(&data.location)
        .bind(fixed_salary)
        .bind(salary_from)
        .bind(salary_to)
        .bind(owner_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    async fn find_active(&self) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE expired = FALSE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list active jobs", e))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE posted_by = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs by owner", e))
    }

    async fn update(&self, job: &Job) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET \
             title = $2, description = $3, category = $4, country = $5, city = $6, \
             location = $7, fixed_salary = $8, salary_from = $9, salary_to = $10, \
             expired = $11 \
             WHERE id = $1 RETURNING *",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.category)
        .bind(&job.country)
        .bind(&job.city)
        .bind(&job.location)
        .bind(job.fixed_salary)
        .bind(job.salary_from)
        .bind(job.salary_to)
        .bind(job.expired)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND posted_by = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;
        Ok(result.rows_affected())
    }
}
