//! Application workflow: submission ordering, cross-entity consistency,
//! role-scoped visibility, and scoped deletion.

mod common;

use bytes::Bytes;
use common::{TestEnv, fixed_salary_job, png_resume, submission};
use jobdesk_core::error::ErrorKind;
use jobdesk_entity::user::Role;
use jobdesk_service::application::ResumeUpload;
use uuid::Uuid;

#[tokio::test]
async fn full_scenario_employer_posts_seeker_applies() {
    let env = TestEnv::new();
    let (employer, employer_ctx) =
        env.register_user("Erik Maas", "erik@corp.test", Role::Employer).await;
    let (seeker, seeker_ctx) =
        env.register_user("Nadia Rahman", "nadia@example.com", Role::JobSeeker).await;
    let (_, other_employer_ctx) =
        env.register_user("Odile Janvier", "odile@corp.test", Role::Employer).await;

    let job = env
        .jobs
        .post(&employer_ctx, fixed_salary_job(1000))
        .await
        .unwrap();

    let app = env
        .applications
        .submit(&seeker_ctx, submission(Some(job.id)), Some(png_resume()))
        .await
        .unwrap();

    // Both parties are snapshotted with their fixed roles.
    assert_eq!(app.applicant().user_id, seeker.id);
    assert_eq!(app.applicant().role, Role::JobSeeker);
    assert_eq!(app.employer().user_id, employer.id);
    assert_eq!(app.employer().role, Role::Employer);
    assert!(!app.resume.storage_id.is_empty());
    assert!(!app.resume.url.is_empty());

    let received = env
        .applications
        .list_for_employer(&employer_ctx)
        .await
        .unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, app.id);

    let sent = env
        .applications
        .list_for_applicant(&seeker_ctx)
        .await
        .unwrap();
    assert_eq!(sent.len(), 1);

    // A different employer sees nothing.
    assert!(
        env.applications
            .list_for_employer(&other_employer_ctx)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn employer_cannot_submit() {
    let env = TestEnv::new();
    let (_, ctx) = env.register_user("Erik Maas", "erik@corp.test", Role::Employer).await;

    let err = env
        .applications
        .submit(&ctx, submission(Some(Uuid::new_v4())), Some(png_resume()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert_eq!(env.blob_store.upload_count(), 0);
}

#[tokio::test]
async fn missing_resume_fails_before_any_upload() {
    let env = TestEnv::new();
    let (_, ctx) = env.register_user("Nadia Rahman", "nadia@example.com", Role::JobSeeker).await;

    let err = env
        .applications
        .submit(&ctx, submission(Some(Uuid::new_v4())), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(env.blob_store.upload_count(), 0);
    assert_eq!(env.application_store.len(), 0);
}

#[tokio::test]
async fn disallowed_media_type_fails_before_any_upload() {
    let env = TestEnv::new();
    let (_, ctx) = env.register_user("Nadia Rahman", "nadia@example.com", Role::JobSeeker).await;

    let pdf = ResumeUpload {
        file_name: "resume.pdf".into(),
        mime_type: "application/pdf".into(),
        data: Bytes::from_static(b"%PDF"),
    };
    let err = env
        .applications
        .submit(&ctx, submission(Some(Uuid::new_v4())), Some(pdf))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(env.blob_store.upload_count(), 0);
}

#[tokio::test]
async fn blank_fields_fail_before_any_upload() {
    let env = TestEnv::new();
    let (_, employer_ctx) = env.register_user("Erik Maas", "erik@corp.test", Role::Employer).await;
    let (_, ctx) = env.register_user("Nadia Rahman", "nadia@example.com", Role::JobSeeker).await;

    let job = env
        .jobs
        .post(&employer_ctx, fixed_salary_job(1000))
        .await
        .unwrap();

    let mut form = submission(Some(job.id));
    form.cover_letter = "  ".into();
    let err = env
        .applications
        .submit(&ctx, form, Some(png_resume()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // Field validation runs before the upload, so no orphaned blob.
    assert_eq!(env.blob_store.upload_count(), 0);
    assert_eq!(env.application_store.len(), 0);
}

#[tokio::test]
async fn unknown_or_absent_job_fails_before_any_upload() {
    let env = TestEnv::new();
    let (_, ctx) = env.register_user("Nadia Rahman", "nadia@example.com", Role::JobSeeker).await;

    let err = env
        .applications
        .submit(&ctx, submission(None), Some(png_resume()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = env
        .applications
        .submit(&ctx, submission(Some(Uuid::new_v4())), Some(png_resume()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    assert_eq!(env.blob_store.upload_count(), 0);
}

#[tokio::test]
async fn upload_failure_leaves_no_partial_application() {
    let env = TestEnv::new();
    let (_, employer_ctx) = env.register_user("Erik Maas", "erik@corp.test", Role::Employer).await;
    let (_, ctx) = env.register_user("Nadia Rahman", "nadia@example.com", Role::JobSeeker).await;

    let job = env
        .jobs
        .post(&employer_ctx, fixed_salary_job(1000))
        .await
        .unwrap();

    env.blob_store.fail_next();
    let err = env
        .applications
        .submit(&ctx, submission(Some(job.id)), Some(png_resume()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Upstream);
    assert_eq!(env.application_store.len(), 0);
}

#[tokio::test]
async fn delete_removes_exactly_the_owned_application() {
    let env = TestEnv::new();
    let (_, employer_ctx) = env.register_user("Erik Maas", "erik@corp.test", Role::Employer).await;
    let (_, nadia) = env.register_user("Nadia Rahman", "nadia@example.com", Role::JobSeeker).await;
    let (_, samir) = env.register_user("Samir Haddad", "samir@example.com", Role::JobSeeker).await;

    let job = env
        .jobs
        .post(&employer_ctx, fixed_salary_job(1000))
        .await
        .unwrap();

    let nadia_app = env
        .applications
        .submit(&nadia, submission(Some(job.id)), Some(png_resume()))
        .await
        .unwrap();
    let samir_app = env
        .applications
        .submit(&samir, submission(Some(job.id)), Some(png_resume()))
        .await
        .unwrap();

    // Deleting another seeker's application reads NotFound: the delete is
    // scoped by (id, applicant) and never falls back to id alone.
    let err = env
        .applications
        .delete_own(&nadia, samir_app.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(env.application_store.len(), 2);

    env.applications.delete_own(&nadia, nadia_app.id).await.unwrap();
    assert_eq!(env.application_store.len(), 1);
    let remaining = env.applications.list_for_applicant(&samir).await.unwrap();
    assert_eq!(remaining[0].id, samir_app.id);
}

#[tokio::test]
async fn listing_is_role_gated_both_ways() {
    let env = TestEnv::new();
    let (_, employer_ctx) = env.register_user("Erik Maas", "erik@corp.test", Role::Employer).await;
    let (_, seeker_ctx) =
        env.register_user("Nadia Rahman", "nadia@example.com", Role::JobSeeker).await;

    assert_eq!(
        env.applications
            .list_for_employer(&seeker_ctx)
            .await
            .unwrap_err()
            .kind,
        ErrorKind::Forbidden
    );
    assert_eq!(
        env.applications
            .list_for_applicant(&employer_ctx)
            .await
            .unwrap_err()
            .kind,
        ErrorKind::Forbidden
    );
    assert_eq!(
        env.applications
            .delete_own(&employer_ctx, Uuid::new_v4())
            .await
            .unwrap_err()
            .kind,
        ErrorKind::Forbidden
    );
}
