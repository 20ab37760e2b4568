//! `use_fetch` — data fetching keyed by a canonical resource path.
//!
//! The hook re-runs whenever the path closure produces a different key
//! (it reads the caller's signals, so filter changes re-trigger it) or when
//! [`FetchHandle::refetch`] is called. Responses are applied through the
//! stale-response guard: switching keys supersedes the in-flight request,
//! and a superseded response is discarded rather than shown.

use api::{FetchState, RequestSequence};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::session::use_session;

/// Handle to a fetch slot: read the state, trigger a manual refetch.
pub struct FetchHandle<T: 'static> {
    state: Signal<FetchState<T>>,
    reload: Signal<u32>,
}

impl<T> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for FetchHandle<T> {}

impl<T: Clone> FetchHandle<T> {
    /// Reactive snapshot of the fetch state.
    pub fn state(&self) -> FetchState<T> {
        (self.state)()
    }
}

impl<T> FetchHandle<T> {
    /// Re-issue the request for the current key. Does not clear shown data.
    pub fn refetch(&mut self) {
        let mut reload = self.reload;
        let next = reload.peek().wrapping_add(1);
        reload.set(next);
    }
}

/// Fetch the resource identified by `path()` into a [`FetchState`].
pub fn use_fetch<T>(path: impl Fn() -> String + 'static) -> FetchHandle<T>
where
    T: DeserializeOwned + 'static,
{
    let session = use_session();
    let mut state = use_signal(FetchState::<T>::default);
    let reload = use_signal(|| 0u32);
    let sequence = use_hook(RequestSequence::new);

    use_effect(move || {
        let key = path();
        // Subscribe to manual refetches as well as key changes.
        let _ = reload();

        let ticket = sequence.begin();
        let api = session.api();
        let ctx = session.clone();
        state.with_mut(|s| s.begin());

        spawn(async move {
            let result = api.get::<T>(&key).await;
            if let Err(err) = &result {
                if err.is_auth_rejection() {
                    // The client already cleared the store; drop the signal too.
                    ctx.refresh();
                }
            }
            if ticket.is_current() {
                state.with_mut(|s| s.finish(result));
            }
        });
    });

    FetchHandle { state, reload }
}
