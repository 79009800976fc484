//! Shared test helpers: in-memory store implementations and a wired-up
//! service environment.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use jobdesk_auth::gate::RoleGate;
use jobdesk_auth::password::{PasswordHasher, PasswordPolicy};
use jobdesk_auth::token::{TokenDecoder, TokenEncoder};
use jobdesk_core::AppError;
use jobdesk_core::config::auth::AuthConfig;
use jobdesk_core::result::AppResult;
use jobdesk_core::traits::{BlobRef, BlobStorage};
use jobdesk_database::repositories::{ApplicationStore, JobStore, UserStore};
use jobdesk_entity::application::{Application, CreateApplication};
use jobdesk_entity::job::{Compensation, CreateJob, Job};
use jobdesk_entity::user::{CreateUser, RegisterRequest, Role, User};
use jobdesk_service::RequestContext;
use jobdesk_service::application::{ApplicationService, ResumeUpload};
use jobdesk_service::auth::AuthService;
use jobdesk_service::job::JobService;

/// In-memory user store with the same uniqueness semantics as the database.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, data: CreateUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("Email already registered"));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            password_hash: data.password_hash,
            role: data.role,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

/// In-memory job store.
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    jobs: Mutex<Vec<Job>>,
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn insert(&self, owner_id: Uuid, data: CreateJob) -> AppResult<Job> {
        let (fixed_salary, salary_from, salary_to) = data.compensation.into_parts();
        let job = Job {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            category: data.category,
            country: data.country,
            city: data.city,
            location: data.location,
            fixed_salary,
            salary_from,
            salary_to,
            posted_by: owner_id,
            expired: false,
            created_at: Utc::now(),
        };
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        Ok(self.jobs.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }

    async fn find_active(&self) -> AppResult<Vec<Job>> {
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| !j.expired)
            .cloned()
            .collect())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Job>> {
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.posted_by == owner_id)
            .cloned()
            .collect())
    }

    async fn update(&self, job: &Job) -> AppResult<Job> {
        let mut jobs = self.jobs.lock().unwrap();
        let slot = jobs
            .iter_mut()
            .find(|j| j.id == job.id)
            .ok_or_else(|| AppError::not_found("Job not found"))?;
        *slot = job.clone();
        Ok(job.clone())
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<u64> {
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|j| !(j.id == id && j.posted_by == owner_id));
        Ok((before - jobs.len()) as u64)
    }
}

/// In-memory application store.
#[derive(Debug, Default)]
pub struct MemoryApplicationStore {
    apps: Mutex<Vec<Application>>,
}

impl MemoryApplicationStore {
    /// Total record count, for delete-exactly-one assertions.
    pub fn len(&self) -> usize {
        self.apps.lock().unwrap().len()
    }
}

#[async_trait]
impl ApplicationStore for MemoryApplicationStore {
    async fn insert(&self, data: CreateApplication) -> AppResult<Application> {
        let app = Application {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            cover_letter: data.cover_letter,
            phone: data.phone,
            address: data.address,
            applicant_id: data.applicant.user_id,
            employer_id: data.employer.user_id,
            resume: data.resume,
            created_at: Utc::now(),
        };
        self.apps.lock().unwrap().push(app.clone());
        Ok(app)
    }

    async fn find_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Application>> {
        Ok(self
            .apps
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.employer_id == employer_id)
            .cloned()
            .collect())
    }

    async fn find_by_applicant(&self, applicant_id: Uuid) -> AppResult<Vec<Application>> {
        Ok(self
            .apps
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.applicant_id == applicant_id)
            .cloned()
            .collect())
    }

    async fn delete_owned(&self, id: Uuid, applicant_id: Uuid) -> AppResult<u64> {
        let mut apps = self.apps.lock().unwrap();
        let before = apps.len();
        apps.retain(|a| !(a.id == id && a.applicant_id == applicant_id));
        Ok((before - apps.len()) as u64)
    }
}

/// Blob store fake that counts uploads and can be told to fail.
#[derive(Debug, Default)]
pub struct CountingBlobStorage {
    uploads: AtomicUsize,
    fail_next: AtomicBool,
}

impl CountingBlobStorage {
    /// How many uploads the external store has seen.
    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    /// Make the next upload fail like an unreachable store.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BlobStorage for CountingBlobStorage {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn upload(&self, file_name: &str, _mime_type: &str, _data: Bytes) -> AppResult<BlobRef> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(AppError::upstream("Blob store unreachable"));
        }
        self.uploads.fetch_add(1, Ordering::SeqCst);
        let id = Uuid::new_v4().to_string();
        Ok(BlobRef {
            url: format!("http://blobs.test/{id}/{file_name}"),
            id,
        })
    }

    async fn delete(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }
}

/// A fully wired service environment over in-memory stores.
pub struct TestEnv {
    pub auth: AuthService,
    pub jobs: JobService,
    pub applications: ApplicationService,
    pub application_store: Arc<MemoryApplicationStore>,
    pub blob_store: Arc<CountingBlobStorage>,
}

impl TestEnv {
    pub fn new() -> Self {
        let config = AuthConfig {
            jwt_secret: "integration-test-secret".into(),
            ..AuthConfig::default()
        };

        let users = Arc::new(MemoryUserStore::default());
        let job_store = Arc::new(MemoryJobStore::default());
        let application_store = Arc::new(MemoryApplicationStore::default());
        let blob_store = Arc::new(CountingBlobStorage::default());
        let gate = Arc::new(RoleGate::new());

        let auth = AuthService::new(
            users,
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordPolicy::new(&config)),
            Arc::new(TokenEncoder::new(&config)),
            Arc::new(TokenDecoder::new(&config)),
        );
        let jobs = JobService::new(job_store.clone(), gate.clone());
        let applications = ApplicationService::new(
            application_store.clone(),
            job_store,
            blob_store.clone(),
            gate,
        );

        Self {
            auth,
            jobs,
            applications,
            application_store,
            blob_store,
        }
    }

    /// Registers a user with the given role and returns it with a context.
    pub async fn register_user(&self, name: &str, email: &str, role: Role) -> (User, RequestContext) {
        let authed = self
            .auth
            .register(RegisterRequest {
                name: name.into(),
                email: email.into(),
                phone: "555-0100".into(),
                password: "hunter2hunter2".into(),
                role,
            })
            .await
            .expect("registration should succeed");
        let ctx = self.auth.context_for(&authed.user);
        (authed.user, ctx)
    }
}

/// A valid posting with a fixed salary.
pub fn fixed_salary_job(amount: i64) -> CreateJob {
    CreateJob {
        title: "Pipeline Engineer".into(),
        description: "Keep the pipes flowing".into(),
        category: "engineering".into(),
        country: "NL".into(),
        city: "Utrecht".into(),
        location: "Remote-friendly".into(),
        compensation: Compensation::Fixed(amount),
    }
}

/// A complete submission form for the given job.
pub fn submission(job_id: Option<Uuid>) -> jobdesk_entity::application::SubmitApplication {
    jobdesk_entity::application::SubmitApplication {
        name: "Nadia Rahman".into(),
        email: "nadia@example.com".into(),
        cover_letter: "I would like to apply.".into(),
        phone: "555-0144".into(),
        address: "12 Canal St".into(),
        job_id,
    }
}

/// A valid PNG resume upload.
pub fn png_resume() -> ResumeUpload {
    ResumeUpload {
        file_name: "resume.png".into(),
        mime_type: "image/png".into(),
        data: Bytes::from_static(b"\x89PNG\r\n"),
    }
}
