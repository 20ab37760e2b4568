//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the process-wide [`SessionStore`], restores it
//! exactly once before the first render that could consult an authorization
//! check, and mirrors the session into a signal so views re-render on
//! login/logout. It also constructs the one [`ApiClient`] and
//! [`ApplicationLifecycle`] every view shares.

use api::applications::ApplicationLifecycle;
use api::{ApiClient, ReqwestBackend};
use dioxus::prelude::*;
use store::{Role, Session, SessionStore};

/// The concrete client the frontends use.
pub type Api = ApiClient<ReqwestBackend>;
pub type Lifecycle = ApplicationLifecycle<ReqwestBackend>;

/// Where an actor lands right after logging in.
pub fn post_login_path(role: Role) -> &'static str {
    match role {
        Role::Employer => "/manage-jobs",
        Role::JobSeeker => "/jobs",
    }
}

/// Shared handles for identity and the API. Cheap to clone.
#[derive(Clone)]
pub struct SessionContext {
    store: SessionStore,
    api: Api,
    lifecycle: Lifecycle,
    session: Signal<Option<Session>>,
}

impl SessionContext {
    /// Reactive read of the current session.
    pub fn current(&self) -> Option<Session> {
        (self.session)()
    }

    pub fn api(&self) -> Api {
        self.api.clone()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    pub fn logout(&self) {
        self.store.logout();
        let mut session = self.session;
        session.set(None);
    }

    /// Re-sync the signal with the store, e.g. after `api` observed an
    /// authentication rejection and cleared the session underneath us.
    pub fn refresh(&self) {
        let mut session = self.session;
        session.set(self.store.current());
    }
}

/// Get the shared session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

fn durable_store() -> SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(std::sync::Arc::new(store::LocalStorage::new()))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::in_memory()
    }
}

/// Provider component that manages authentication state.
/// Wrap the app with this component before any data-bound view.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = use_hook(durable_store);

    // One-shot initialization gate: the persisted session is rehydrated
    // before the first authorization check can run.
    let session = use_signal({
        let store = store.clone();
        move || store.restore()
    });

    let ctx = use_hook(move || {
        let api = ApiClient::new(ReqwestBackend::default(), store.clone());
        SessionContext {
            store,
            api: api.clone(),
            lifecycle: ApplicationLifecycle::new(api),
            session,
        }
    });
    use_context_provider(|| ctx);

    rsx! {
        {children}
    }
}
