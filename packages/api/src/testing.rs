//! Scripted transport double for tests: responses are queued ahead of time
//! and every request is recorded for assertion.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::http::{HttpBackend, HttpRequest, HttpResponse};

enum Scripted {
    Ready(Result<HttpResponse, String>),
    /// Resolves only when the paired sender fires; used to hold a request
    /// in flight while the test observes intermediate state.
    Wait(oneshot::Receiver<Result<HttpResponse, String>>),
}

#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(Ok(HttpResponse {
                status,
                body: body.to_string(),
            })));
    }

    pub fn push_transport_failure(&self, detail: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(Err(detail.to_string())));
    }

    /// Queue a response that stays in flight until the returned sender is
    /// fired with the eventual outcome.
    pub fn push_gated(&self) -> oneshot::Sender<Result<HttpResponse, String>> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push_back(Scripted::Wait(rx));
        tx
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn recorded(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpBackend for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Ready(outcome)) => outcome,
            Some(Scripted::Wait(rx)) => rx.await.unwrap_or(Err("gate dropped".to_string())),
            None => Err("no scripted response".to_string()),
        }
    }
}

pub(crate) fn ok_response(status: u16, body: &str) -> Result<HttpResponse, String> {
    Ok(HttpResponse {
        status,
        body: body.to_string(),
    })
}
