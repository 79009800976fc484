//! Application store trait and repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use jobdesk_core::error::{AppError, ErrorKind};
use jobdesk_core::result::AppResult;
use jobdesk_entity::application::{Application, CreateApplication};

/// Persistence contract for applications.
#[async_trait]
pub trait ApplicationStore: Send + Sync + 'static {
    /// Persist a new application. This is the single commit point of the
    /// submission workflow; nothing is written before it.
    async fn insert(&self, data: CreateApplication) -> AppResult<Application>;

    /// All applications where `employer_id` is the employer party.
    async fn find_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Application>>;

    /// All applications where `applicant_id` is the applicant party.
    async fn find_by_applicant(&self, applicant_id: Uuid) -> AppResult<Vec<Application>>;

    /// Delete an application scoped by `(id, applicant_id)` atomically.
    ///
    /// Returns the number of rows removed; zero means the record does not
    /// exist or belongs to a different applicant. Never deletes by id alone.
    async fn delete_owned(&self, id: Uuid, applicant_id: Uuid) -> AppResult<u64>;
}

/// sqlx-backed application repository.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for ApplicationRepository {
    async fn insert(&self, data: CreateApplication) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "INSERT INTO applications \
             (id, name, email, cover_letter, phone, address, \
              applicant_id, employer_id, storage_id, url, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.cover_letter)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(data.applicant.user_id)
        .bind(data.employer.user_id)
        .bind(&data.resume.storage_id)
        .bind(&data.resume.url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create application", e))
    }

    async fn find_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Application>> {
        sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE employer_id = $1 ORDER BY created_at DESC",
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list applications by employer",
                e,
            )
        })
    }

    async fn find_by_applicant(&self, applicant_id: Uuid) -> AppResult<Vec<Application>> {
        sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE applicant_id = $1 ORDER BY created_at DESC",
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list applications by applicant",
                e,
            )
        })
    }

    async fn delete_owned(&self, id: Uuid, applicant_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1 AND applicant_id = $2")
            .bind(id)
            .bind(applicant_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete application", e)
            })?;
        Ok(result.rows_affected())
    }
}
