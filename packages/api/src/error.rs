//! # Error taxonomy
//!
//! Three failure channels, matching how the UI reports them:
//!
//! - [`ValidationErrors`] — client-local, per-field, detected before any
//!   request is sent. Rendered inline next to the offending input and never
//!   put on the wire.
//! - [`ApiError`] — anything that happened after a request was issued:
//!   - [`AuthRejected`](ApiError::AuthRejected): 401/403 from any endpoint.
//!     The client logs the session out once and surfaces the error; there is
//!     no retry path.
//!   - [`Business`](ApiError::Business): other 4xx with a server-provided
//!     message, surfaced verbatim.
//!   - [`Transport`](ApiError::Transport): network failure or 5xx, surfaced
//!     as a generic failure so the user can retry manually.
//! - [`FormError`] — the union the form-submitting operations return, so a
//!   view can split inline field errors from banner errors with one match.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(())` when no field failed, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A failed request, classified by what the caller can do about it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401/403 — the session was rejected and has been cleared.
    #[error("Your session has expired. Please log in again.")]
    AuthRejected,
    /// Other 4xx — the server explained what was wrong with the request.
    #[error("{0}")]
    Business(String),
    /// Network failure, timeout, or 5xx.
    #[error("Something went wrong. Please try again.")]
    Transport(String),
}

impl ApiError {
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::AuthRejected)
    }
}

/// Failure of an operation that starts with client-local validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the server-provided message from an error response body.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "Email is required");
        errors.push("email", "Invalid email format");
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.push("name", "Name is required");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn message_extraction_falls_back_on_malformed_bodies() {
        assert_eq!(
            message_from_body(r#"{"message":"Already applied for this job"}"#).as_deref(),
            Some("Already applied for this job")
        );
        assert!(message_from_body("<html>502</html>").is_none());
        assert!(message_from_body(r#"{"detail":"other shape"}"#).is_none());
    }
}
