//! Job listing, detail, and employer management endpoints.
//!
//! The listing path is derived from the filter's canonical query string, so
//! the path itself is the resource key the fetch layer watches.

use serde_json::json;

use crate::client::ApiClient;
use crate::error::{ApiError, FormError, ValidationErrors};
use crate::http::HttpBackend;
use crate::models::{Job, JobPage, NewJob};
use crate::query::JobFilter;

/// Resource path for the employer's own postings.
pub const MY_JOBS_PATH: &str = "/jobs/employer/my-jobs";

/// Resource path for a job listing request under the given filter.
pub fn jobs_path(filter: &JobFilter) -> String {
    format!("/jobs?{}", filter.query_string())
}

/// Resource path for one job's detail.
pub fn job_path(id: i64) -> String {
    format!("/jobs/{id}")
}

pub async fn list_jobs<H: HttpBackend>(
    client: &ApiClient<H>,
    filter: &JobFilter,
) -> Result<JobPage, ApiError> {
    client.get(&jobs_path(filter)).await
}

pub async fn job_detail<H: HttpBackend>(client: &ApiClient<H>, id: i64) -> Result<Job, ApiError> {
    client.get(&job_path(id)).await
}

pub async fn my_jobs<H: HttpBackend>(client: &ApiClient<H>) -> Result<Vec<Job>, ApiError> {
    client.get(MY_JOBS_PATH).await
}

pub async fn delete_job<H: HttpBackend>(client: &ApiClient<H>, id: i64) -> Result<(), ApiError> {
    client.delete(&job_path(id)).await
}

/// Field checks for a job posting. Performed before any request is sent.
pub fn validate_new_job(job: &NewJob) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if job.title.trim().is_empty() {
        errors.push("title", "Job title is required");
    }
    if job.description.trim().is_empty() {
        errors.push("description", "Description is required");
    }
    if job.requirements.trim().is_empty() {
        errors.push("requirements", "Requirements are required");
    }
    if job.salary == 0 {
        errors.push("salary", "Salary is required");
    }
    if job.location.trim().is_empty() {
        errors.push("location", "Location is required");
    }
    errors.into_result()
}

/// Post a new job. Validation failures never reach the network.
pub async fn create_job<H: HttpBackend>(
    client: &ApiClient<H>,
    job: &NewJob,
) -> Result<Job, FormError> {
    validate_new_job(job)?;

    let created = client
        .post(
            "/jobs",
            Some(json!({
                "title": job.title.trim(),
                "description": job.description.trim(),
                "requirements": job.requirements.trim(),
                "salary": job.salary,
                "location": job.location.trim(),
                "type": job.r#type,
            })),
        )
        .await?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use store::{Role, SessionStore, UserInfo};

    use super::*;
    use crate::query::FilterField;
    use crate::testing::FakeBackend;

    const EMPTY_PAGE: &str = r#"{"jobs":[],"total":0,"pages":0}"#;

    fn client(fake: &FakeBackend) -> ApiClient<FakeBackend> {
        ApiClient::new(fake.clone(), SessionStore::in_memory())
    }

    fn employer_client(fake: &FakeBackend) -> ApiClient<FakeBackend> {
        let session = SessionStore::in_memory();
        session.login(
            "tok-e".into(),
            UserInfo {
                id: 9,
                email: "hr@acme.co".into(),
                name: "Acme HR".into(),
                role: Role::Employer,
            },
        );
        ApiClient::new(fake.clone(), session)
    }

    #[tokio::test]
    async fn successive_filter_changes_fetch_distinct_keys_with_page_one() {
        let fake = FakeBackend::new();
        fake.push_json(200, EMPTY_PAGE);
        fake.push_json(200, EMPTY_PAGE);
        let client = client(&fake);

        let first = JobFilter::default().set(FilterField::Search, "react");
        list_jobs(&client, &first).await.unwrap();

        let second = first.set(FilterField::Location, "Jakarta");
        list_jobs(&client, &second).await.unwrap();

        let requests = fake.recorded();
        assert_eq!(requests[0].path, "/jobs?search=react&page=1");
        assert_eq!(requests[1].path, "/jobs?search=react&location=Jakarta&page=1");
        assert_ne!(requests[0].path, requests[1].path);
    }

    #[tokio::test]
    async fn invalid_posting_sends_no_request() {
        let fake = FakeBackend::new();
        let client = employer_client(&fake);

        let err = create_job(&client, &NewJob::default()).await.unwrap_err();
        let FormError::Invalid(errors) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.get("title"), Some("Job title is required"));
        assert_eq!(errors.get("salary"), Some("Salary is required"));
        assert_eq!(fake.request_count(), 0);
    }

    #[tokio::test]
    async fn posting_sends_trimmed_fields() {
        let fake = FakeBackend::new();
        fake.push_json(
            201,
            r#"{"id":11,"title":"Backend Engineer","company_name":"Acme","description":"Build APIs","requirements":"Rust","salary":9000000,"location":"Jakarta","type":"Full-time","created_at":"2026-08-01T00:00:00Z"}"#,
        );
        let client = employer_client(&fake);

        let job = NewJob {
            title: "  Backend Engineer ".into(),
            description: "Build APIs".into(),
            requirements: "Rust".into(),
            salary: 9_000_000,
            location: "Jakarta".into(),
            r#type: "Full-time".into(),
        };
        let created = create_job(&client, &job).await.unwrap();
        assert_eq!(created.id, 11);

        let body = fake.recorded()[0].body.clone().unwrap();
        assert_eq!(body["title"], "Backend Engineer");
        assert_eq!(body["type"], "Full-time");
    }

    #[tokio::test]
    async fn delete_uses_the_job_path() {
        let fake = FakeBackend::new();
        fake.push_json(204, "");
        let client = employer_client(&fake);

        delete_job(&client, 11).await.unwrap();
        assert_eq!(fake.recorded()[0].path, "/jobs/11");
    }
}
