//! # ApplicationLifecycle — apply and status-transition workflow
//!
//! The closest thing the client has to a state machine. An application is
//! created in `applied` exactly once, by [`ApplicationLifecycle::apply`];
//! from there the employer may request `shortlisted`, `accepted`, or
//! `rejected` in any order — the server is authoritative and the client
//! deliberately does not block "backward" transitions.
//!
//! Client-side rules enforced here, before anything reaches the wire:
//!
//! - both operations route through [`admit`] — an anonymous or wrong-role
//!   actor gets the redirect [`Decision`] back and no request is issued;
//! - `apply` keeps an advisory per-lifetime set of job ids so the same view
//!   session cannot double-apply (the server's duplicate answer is still
//!   surfaced verbatim if it disagrees);
//! - `set_status` allows at most one in-flight update per application id;
//!   a second concurrent request for the same id is rejected immediately so
//!   the list cannot flicker through out-of-order echoes.
//!
//! On a successful `set_status` the caller refetches its list rather than
//! trusting the echo — displayed state always comes from the server.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde_json::json;
use store::{admit, Decision, Role};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;
use crate::models::{Application, ApplicationStatus, EmployerApplication, SeekerApplication};

/// Resource path for the seeker's application list.
pub const MY_APPLICATIONS_PATH: &str = "/applications/my-applications";
/// Resource path for the employer's applicant list.
pub const EMPLOYER_APPLICANTS_PATH: &str = "/applications/employer/applicants";

/// Why a lifecycle operation did not complete.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifecycleError {
    /// Admission failed; carries the redirect the caller should follow.
    #[error("You are not allowed to perform this action.")]
    Denied(Decision),
    /// An update for this application is already in flight.
    #[error("This application is already being updated.")]
    UpdateInFlight,
    /// This view session already applied to the job.
    #[error("You have already applied to this job.")]
    AlreadyApplied,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Shared workflow handle; cheap to clone, all clones see the same pending
/// and applied sets.
#[derive(Clone)]
pub struct ApplicationLifecycle<H: HttpBackend> {
    client: ApiClient<H>,
    pending: Arc<Mutex<HashSet<i64>>>,
    applied: Arc<Mutex<HashSet<i64>>>,
}

/// Releases the per-application pending slot when the update settles,
/// whether it completed or was dropped mid-flight.
struct PendingSlot {
    id: i64,
    set: Arc<Mutex<HashSet<i64>>>,
}

impl Drop for PendingSlot {
    fn drop(&mut self) {
        self.set.lock().unwrap().remove(&self.id);
    }
}

impl<H: HttpBackend> ApplicationLifecycle<H> {
    pub fn new(client: ApiClient<H>) -> Self {
        Self {
            client,
            pending: Arc::new(Mutex::new(HashSet::new())),
            applied: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Apply to a job as the current job seeker.
    ///
    /// Denials are decided locally (no request is issued): anonymous actors
    /// get `RedirectLogin`, employers get `RedirectHome`.
    pub async fn apply(&self, job_id: i64) -> Result<(), LifecycleError> {
        let session = self.client.session().current();
        match admit(session.as_ref(), Some(Role::JobSeeker)) {
            Decision::Allow => {}
            decision => return Err(LifecycleError::Denied(decision)),
        }

        if !self.applied.lock().unwrap().insert(job_id) {
            return Err(LifecycleError::AlreadyApplied);
        }

        match self.client.post_ack(&format!("/jobs/{job_id}/apply")).await {
            Ok(()) => Ok(()),
            Err(err) => {
                // Leave the id free for a manual retry.
                self.applied.lock().unwrap().remove(&job_id);
                Err(err.into())
            }
        }
    }

    /// Whether this view session already applied to the job.
    pub fn has_applied(&self, job_id: i64) -> bool {
        self.applied.lock().unwrap().contains(&job_id)
    }

    /// Request a status transition as the current employer.
    ///
    /// At most one update per application id may be in flight; the caller
    /// should refetch its list after a success.
    pub async fn set_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<Application, LifecycleError> {
        let session = self.client.session().current();
        match admit(session.as_ref(), Some(Role::Employer)) {
            Decision::Allow => {}
            decision => return Err(LifecycleError::Denied(decision)),
        }

        let slot = {
            let mut pending = self.pending.lock().unwrap();
            if !pending.insert(application_id) {
                return Err(LifecycleError::UpdateInFlight);
            }
            PendingSlot {
                id: application_id,
                set: self.pending.clone(),
            }
        };

        let result = self
            .client
            .put(
                &format!("/applications/{application_id}"),
                json!({ "status": status }),
            )
            .await;
        drop(slot);

        result.map_err(Into::into)
    }

    /// Whether an update for the application is currently in flight.
    pub fn is_updating(&self, application_id: i64) -> bool {
        self.pending.lock().unwrap().contains(&application_id)
    }
}

pub async fn my_applications<H: HttpBackend>(
    client: &ApiClient<H>,
) -> Result<Vec<SeekerApplication>, ApiError> {
    client.get(MY_APPLICATIONS_PATH).await
}

pub async fn employer_applicants<H: HttpBackend>(
    client: &ApiClient<H>,
) -> Result<Vec<EmployerApplication>, ApiError> {
    client.get(EMPLOYER_APPLICANTS_PATH).await
}

#[cfg(test)]
mod tests {
    use store::{SessionStore, UserInfo};

    use super::*;
    use crate::testing::{ok_response, FakeBackend};

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: 5,
            email: "actor@example.com".into(),
            name: "Actor".into(),
            role,
        }
    }

    fn lifecycle(fake: &FakeBackend, session: Option<Role>) -> ApplicationLifecycle<FakeBackend> {
        let store = SessionStore::in_memory();
        if let Some(role) = session {
            store.login("tok".into(), user(role));
        }
        ApplicationLifecycle::new(ApiClient::new(fake.clone(), store))
    }

    #[tokio::test]
    async fn anonymous_apply_is_redirected_before_any_request() {
        let fake = FakeBackend::new();
        let lifecycle = lifecycle(&fake, None);

        let err = lifecycle.apply(42).await.unwrap_err();
        assert_eq!(err, LifecycleError::Denied(Decision::RedirectLogin));
        assert_eq!(fake.request_count(), 0);
    }

    #[tokio::test]
    async fn employer_apply_is_sent_home() {
        let fake = FakeBackend::new();
        let lifecycle = lifecycle(&fake, Some(Role::Employer));

        let err = lifecycle.apply(42).await.unwrap_err();
        assert_eq!(err, LifecycleError::Denied(Decision::RedirectHome));
        assert_eq!(fake.request_count(), 0);
    }

    #[tokio::test]
    async fn seeker_applies_once_per_view_session() {
        let fake = FakeBackend::new();
        fake.push_json(200, r#"{"ok":true}"#);
        let lifecycle = lifecycle(&fake, Some(Role::JobSeeker));

        lifecycle.apply(42).await.unwrap();
        assert!(lifecycle.has_applied(42));

        let err = lifecycle.apply(42).await.unwrap_err();
        assert_eq!(err, LifecycleError::AlreadyApplied);
        assert_eq!(fake.request_count(), 1);
        assert_eq!(fake.recorded()[0].path, "/jobs/42/apply");
    }

    #[tokio::test]
    async fn failed_apply_frees_the_job_for_retry() {
        let fake = FakeBackend::new();
        fake.push_json(400, r#"{"message":"Already applied for this job"}"#);
        fake.push_json(200, r#"{"ok":true}"#);
        let lifecycle = lifecycle(&fake, Some(Role::JobSeeker));

        let err = lifecycle.apply(42).await.unwrap_err();
        assert_eq!(
            err,
            LifecycleError::Api(ApiError::Business("Already applied for this job".into()))
        );
        assert!(!lifecycle.has_applied(42));

        lifecycle.apply(42).await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_status_updates_for_one_application_are_rejected() {
        let fake = FakeBackend::new();
        let gate = fake.push_gated();
        let lifecycle = lifecycle(&fake, Some(Role::Employer));

        let first = {
            let lifecycle = lifecycle.clone();
            tokio::spawn(async move { lifecycle.set_status(7, ApplicationStatus::Shortlisted).await })
        };
        // Let the first update reach the wire and park there.
        while !lifecycle.is_updating(7) {
            tokio::task::yield_now().await;
        }

        let second = lifecycle.set_status(7, ApplicationStatus::Rejected).await;
        assert_eq!(second.unwrap_err(), LifecycleError::UpdateInFlight);

        // A different application is unaffected.
        fake.push_json(
            200,
            r#"{"id":8,"job_id":2,"seeker_id":5,"status":"accepted","applied_date":"2026-07-30"}"#,
        );
        lifecycle
            .set_status(8, ApplicationStatus::Accepted)
            .await
            .unwrap();

        gate.send(ok_response(
            200,
            r#"{"id":7,"job_id":2,"seeker_id":5,"status":"shortlisted","applied_date":"2026-07-30"}"#,
        ))
        .unwrap();

        let updated = first.await.unwrap().unwrap();
        assert_eq!(updated.status, ApplicationStatus::Shortlisted);
        // Slot released: the same id may be updated again.
        assert!(!lifecycle.is_updating(7));
    }

    #[tokio::test]
    async fn successful_update_then_refetch_shows_the_new_status() {
        let fake = FakeBackend::new();
        fake.push_json(
            200,
            r#"{"id":7,"job_id":2,"seeker_id":5,"status":"shortlisted","applied_date":"2026-07-30"}"#,
        );
        fake.push_json(
            200,
            r#"[{"id":7,"job_id":2,"status":"shortlisted","applied_date":"2026-07-30","job_title":"Backend Engineer","seeker_name":"Mira","seeker_email":"mira@example.com"}]"#,
        );
        let lifecycle = lifecycle(&fake, Some(Role::Employer));

        lifecycle
            .set_status(7, ApplicationStatus::Shortlisted)
            .await
            .unwrap();

        // The view refetches instead of trusting the echo.
        let client = ApiClient::new(fake.clone(), {
            let s = SessionStore::in_memory();
            s.login("tok".into(), user(Role::Employer));
            s
        });
        let list = employer_applicants(&client).await.unwrap();
        assert_eq!(list[0].id, 7);
        assert_eq!(list[0].status, ApplicationStatus::Shortlisted);

        let requests = fake.recorded();
        assert_eq!(requests[0].path, "/applications/7");
        assert_eq!(requests[0].body.as_ref().unwrap()["status"], "shortlisted");
        assert_eq!(requests[1].path, EMPLOYER_APPLICANTS_PATH);
    }
}
