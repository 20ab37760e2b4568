//! # Fetch lifecycle — loading/error state and the stale-response guard
//!
//! Every data-bound view drives a [`FetchState`] through the same cycle:
//! [`begin`](FetchState::begin) when a request is issued,
//! [`finish`](FetchState::finish) when its response is *applied*. Whether a
//! response may be applied at all is decided by the issuance counter:
//!
//! - [`RequestSequence::begin`] stamps each issued request with a
//!   [`RequestTicket`];
//! - a ticket is current only while no later ticket exists for the same
//!   sequence;
//! - a response whose ticket is no longer current is discarded, never
//!   applied. Changing a view's resource key therefore *logically* cancels
//!   the in-flight request — the transport is not aborted, its answer just
//!   cannot reach the state anymore.
//!
//! Failures keep the previous `data` (stale-but-visible) and are never
//! retried automatically; retry is the caller's explicit refetch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ApiError;

/// Transient request state owned by a single view.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Mark a request as issued. Previous data stays visible while the new
    /// answer is in flight.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a response. Success replaces the data; failure records the
    /// message and keeps whatever data was already shown.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// True only for the very first fetch of a key: nothing to show yet.
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.data.is_none()
    }
}

/// Monotonic issuance counter for one resource slot.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a newly issued request, superseding all earlier tickets.
    pub fn begin(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            seq,
            latest: self.latest.clone(),
        }
    }
}

/// Proof of issuance for a single request.
#[derive(Clone, Debug)]
pub struct RequestTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTicket {
    /// Whether this request is still the latest issued for its sequence.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }
}

/// A [`FetchState`] shareable between an issuing context and the response
/// handler. The Dioxus hook keeps its state in a signal instead; this alias
/// serves non-reactive callers and tests.
pub type SharedFetchState<T> = Arc<Mutex<FetchState<T>>>;

/// Await `request` and apply its outcome to `state` — unless the ticket
/// has been superseded, in which case the response is discarded.
pub async fn run<T, Fut>(ticket: RequestTicket, state: SharedFetchState<T>, request: Fut)
where
    Fut: std::future::Future<Output = Result<T, ApiError>>,
{
    let result = request.await;
    let mut state = state.lock().unwrap();
    if ticket.is_current() {
        state.finish(result);
    }
}
