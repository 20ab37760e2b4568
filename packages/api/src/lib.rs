//! # API crate — REST collaborator client for the job marketplace
//!
//! This crate is everything the frontends need to talk to the marketplace
//! API: typed models, the error taxonomy, the HTTP plumbing, and the three
//! stateful workflows (search query, fetch lifecycle, application
//! lifecycle). The `ui` crate renders on top of it; nothing in here knows
//! about Dioxus.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | [`HttpBackend`] trait, request/response records, the reqwest implementation |
//! | [`client`] | [`ApiClient`] — bearer-token attachment, status mapping, logout-on-rejection |
//! | [`error`] | [`ApiError`] taxonomy and [`ValidationErrors`] |
//! | [`models`] | Wire types: jobs, applications, profile |
//! | [`query`] | [`JobFilter`] — canonical search/filter/pagination descriptor |
//! | [`fetch`] | [`FetchState`] and the stale-response guard |
//! | [`auth`] | Login/registration with client-local validation |
//! | [`jobs`] | Job listing, detail, posting, and management endpoints |
//! | [`applications`] | [`ApplicationLifecycle`] — apply and status-transition workflow |
//! | [`profile`] | Profile read/update |
//!
//! Every request path here resolves to a success value or a reported
//! [`ApiError`]; no operation panics and nothing is retried behind the
//! caller's back.

pub mod applications;
pub mod auth;
pub mod client;
pub mod error;
pub mod fetch;
pub mod http;
pub mod jobs;
pub mod models;
pub mod profile;
pub mod query;

#[cfg(test)]
pub(crate) mod testing;

pub use applications::{ApplicationLifecycle, LifecycleError};
pub use client::ApiClient;
pub use error::{ApiError, FormError, ValidationErrors};
pub use fetch::{FetchState, RequestSequence, RequestTicket};
pub use http::{HttpBackend, ReqwestBackend, DEFAULT_BASE};
pub use models::{
    Application, ApplicationStatus, EmployerApplication, Job, JobPage, NewJob, ProfileData,
    SeekerApplication,
};
pub use query::{FilterField, JobFilter};

pub use store::{Decision, Role, Session, SessionStore, UserInfo};
