//! # HTTP plumbing — backend trait and the reqwest implementation
//!
//! [`HttpBackend`] is the transport seam: the [`ApiClient`](crate::client)
//! is written against it, the production build plugs in [`ReqwestBackend`],
//! and tests plug in a scripted fake. Timeouts, TLS, and connection reuse
//! are the transport's business; the client above only sees a status code
//! and a body, or a transport failure string.

use serde_json::Value;

/// Base path the API is mounted under.
pub const DEFAULT_BASE: &str = "/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request as the client hands it to the transport. `path` is relative to
/// the backend's base and already carries the canonical query string.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

/// A response as the transport hands it back: status plus raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async transport for API requests.
///
/// An `Err` is a transport-level failure (no response); every received
/// response, whatever the status, is an `Ok`.
pub trait HttpBackend {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, String>>;
}

/// Production transport over a shared [`reqwest::Client`].
#[derive(Clone, Debug)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}

impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(HttpResponse { status, body })
    }
}
