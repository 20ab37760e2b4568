//! Wire types for the marketplace API.
//!
//! All server-owned records are read-only on the client: the structs here
//! deserialize responses and never carry client-side bookkeeping. Dates are
//! ISO-8601 strings as the server sends them; formatting is a presentation
//! concern.

use serde::{Deserialize, Serialize};

/// Job types the marketplace recognizes, in display order.
pub const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Internship"];

/// A job posting as returned by `GET /jobs` and `GET /jobs/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub requirements: String,
    pub salary: u64,
    pub location: String,
    pub r#type: String,
    #[serde(default)]
    pub level: Option<String>,
    pub created_at: String,
}

/// One page of job-listing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total: u64,
    pub pages: u32,
}

/// Fields an employer submits to `POST /jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: u64,
    pub location: String,
    pub r#type: String,
}

impl Default for NewJob {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            requirements: String::new(),
            salary: 0,
            location: String::new(),
            r#type: JOB_TYPES[0].to_string(),
        }
    }
}

/// Application workflow status. `Applied` is the sole initial state; the
/// server permits transitions between the other three in any order and the
/// client does not impose a stricter machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// The wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// A bare application record, as echoed by `PUT /applications/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub seeker_id: i64,
    pub status: ApplicationStatus,
    pub applied_date: String,
}

/// An application joined with its job, for the seeker's own list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekerApplication {
    pub id: i64,
    pub job_id: i64,
    pub status: ApplicationStatus,
    pub applied_date: String,
    pub job_title: String,
    pub company_name: String,
    pub location: String,
}

/// An application joined with its applicant, for the employer's triage list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerApplication {
    pub id: i64,
    pub job_id: i64,
    pub status: ApplicationStatus,
    pub applied_date: String,
    pub job_title: String,
    pub seeker_name: String,
    pub seeker_email: String,
}

/// The current user's profile, read and written at `/profile`.
///
/// `email` is read-only in the UI; `cv_url` is produced by the blob-storage
/// collaborator and only displayed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub cv_url: String,
}
