//! # Session domain models
//!
//! Client-safe records describing the current actor:
//!
//! - [`Role`] — which side of the marketplace the account is on. Gates
//!   role-restricted views and operations; the wire names are the snake_case
//!   strings the API speaks (`"job_seeker"`, `"employer"`).
//! - [`UserInfo`] — the profile summary returned by the auth endpoints and
//!   persisted alongside the token. Deliberately small: everything else about
//!   a user is fetched on demand from `/profile`.
//! - [`Session`] — an authenticated actor: opaque bearer token plus its
//!   [`UserInfo`]. An anonymous visitor is the *absence* of a `Session`
//!   (`Option<Session>` everywhere), so a half-authenticated state cannot be
//!   represented.

use serde::{Deserialize, Serialize};

/// Account role, gating which views and operations an actor may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    JobSeeker,
    Employer,
}

impl Role {
    /// The wire/storage name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::JobSeeker => "job_seeker",
            Role::Employer => "employer",
        }
    }
}

/// Profile summary of an authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// The current authenticated actor: credential plus profile summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}
