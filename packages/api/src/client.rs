//! # ApiClient — request execution against the REST collaborator
//!
//! One client instance is shared by every workflow. Per request it:
//!
//! 1. attaches the current session's token as a bearer credential (when a
//!    session exists),
//! 2. hands the request to the [`HttpBackend`],
//! 3. maps the outcome onto the [`ApiError`](crate::error) taxonomy.
//!
//! An authentication rejection (401/403) additionally triggers
//! [`SessionStore::logout`] — once, with no retry — so a revoked token
//! cannot keep a ghost session alive. Every other failure leaves the
//! session untouched.

use serde::de::DeserializeOwned;
use serde_json::Value;
use store::SessionStore;

use crate::error::{message_from_body, ApiError};
use crate::http::{HttpBackend, HttpRequest, HttpResponse, Method};

#[derive(Clone)]
pub struct ApiClient<H: HttpBackend> {
    http: H,
    session: SessionStore,
}

impl<H: HttpBackend> ApiClient<H> {
    pub fn new(http: H, session: SessionStore) -> Self {
        Self { http, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::Get, path, None).await?;
        decode(&body)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let body = self.execute(Method::Post, path, body).await?;
        decode(&body)
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, ApiError> {
        let body = self.execute(Method::Put, path, Some(body)).await?;
        decode(&body)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None).await?;
        Ok(())
    }

    /// Fire-and-acknowledge POST for endpoints whose success body carries
    /// nothing the client needs.
    pub async fn post_ack(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Post, path, None).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<String, ApiError> {
        let request = HttpRequest {
            method,
            path: path.to_string(),
            body,
            bearer: self.session.token(),
        };

        let response = self
            .http
            .send(request)
            .await
            .map_err(ApiError::Transport)?;

        self.classify(path, response)
    }

    fn classify(&self, path: &str, response: HttpResponse) -> Result<String, ApiError> {
        if response.is_success() {
            return Ok(response.body);
        }

        match response.status {
            401 | 403 => {
                tracing::warn!(path, status = response.status, "credential rejected");
                self.session.logout();
                Err(ApiError::AuthRejected)
            }
            status @ 400..=499 => Err(ApiError::Business(
                message_from_body(&response.body)
                    .unwrap_or_else(|| format!("Request failed ({status})")),
            )),
            status => Err(ApiError::Transport(format!("server error ({status})"))),
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| {
        tracing::error!("unreadable response body: {err}");
        ApiError::Transport(format!("invalid response: {err}"))
    })
}
