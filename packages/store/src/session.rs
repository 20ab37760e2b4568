//! # SessionStore — the single writer of authentication state
//!
//! [`SessionStore`] owns the process-wide `Option<Session>` and the durable
//! copy of it. All reads and writes of the durable copy go through the
//! [`CredentialStore`] trait, so the same logic works against browser
//! `localStorage` ([`crate::local`]) or an in-memory map
//! ([`crate::memory`]) in tests and non-web builds.
//!
//! ## Durable layout
//!
//! Two keys, written together on [`login`](SessionStore::login) and removed
//! together on [`logout`](SessionStore::logout):
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | opaque bearer credential |
//! | [`USER_KEY`] (`"user"`) | [`UserInfo`] serialized as JSON |
//!
//! Absence of either key is treated as "no session", so a torn write (one
//! key present, the other missing) degrades to anonymous rather than a
//! corrupt session.
//!
//! ## Lifecycle
//!
//! [`restore`](SessionStore::restore) rehydrates the in-memory session from
//! the durable keys exactly once per store lifetime; later calls are no-ops.
//! Callers that gate on authentication must call it before their first
//! [`current`](SessionStore::current) read. `login`/`logout` replace the
//! in-memory session under a lock, so no reader ever observes a
//! half-updated session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::{Session, UserInfo};

/// Durable key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Durable key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// Synchronous key-value storage for the persisted credential pair.
///
/// Both real backends (browser `localStorage`, in-memory map) are
/// synchronous primitives, so the trait is too. Implementations must never
/// panic on storage failure; a failed read is `None`.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Shared handle to the authentication state. Cheap to clone; all clones
/// observe the same session.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn CredentialStore + Send + Sync>,
    current: Arc<Mutex<Option<Session>>>,
    restored: Arc<AtomicBool>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn CredentialStore + Send + Sync>) -> Self {
        Self {
            backend,
            current: Arc::new(Mutex::new(None)),
            restored: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Store backed by a fresh in-memory map. Used in tests and as the
    /// fallback when no durable storage is available.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::memory::MemoryCredentials::new()))
    }

    /// Rehydrate the session from durable storage.
    ///
    /// Runs the load at most once per store lifetime; subsequent calls
    /// return immediately. Returns the session now in effect.
    pub fn restore(&self) -> Option<Session> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return self.current();
        }

        let token = self.backend.get(TOKEN_KEY);
        let user = self.backend.get(USER_KEY);

        let session = match (token, user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<UserInfo>(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(err) => {
                    tracing::warn!("discarding unreadable persisted user record: {err}");
                    self.backend.remove(TOKEN_KEY);
                    self.backend.remove(USER_KEY);
                    None
                }
            },
            _ => None,
        };

        *self.current.lock().unwrap() = session.clone();
        session
    }

    /// Whether [`restore`](Self::restore) has completed.
    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }

    /// Persist the credential pair and swap the in-memory session.
    pub fn login(&self, token: String, user: UserInfo) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                self.backend.set(TOKEN_KEY, &token);
                self.backend.set(USER_KEY, &raw);
            }
            Err(err) => tracing::error!("failed to serialize user record: {err}"),
        }

        tracing::info!(user = %user.email, "session established");
        *self.current.lock().unwrap() = Some(Session { token, user });
        // A store that logs in before restore() must not later clobber the
        // live session with stale durable state.
        self.restored.store(true, Ordering::SeqCst);
    }

    /// Clear durable storage and the in-memory session.
    pub fn logout(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);

        let mut current = self.current.lock().unwrap();
        if current.is_some() {
            tracing::info!("session cleared");
        }
        *current = None;
    }

    /// Snapshot of the current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.current.lock().unwrap().clone()
    }

    /// The bearer token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.current.lock().unwrap().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryCredentials;

    fn user() -> UserInfo {
        UserInfo {
            id: 7,
            email: "dina@example.com".into(),
            name: "Dina".into(),
            role: Role::JobSeeker,
        }
    }

    #[test]
    fn login_then_restore_in_fresh_process_yields_equivalent_session() {
        let disk = Arc::new(MemoryCredentials::new());

        let first = SessionStore::new(disk.clone());
        first.login("tok-123".into(), user());
        let before = first.current().unwrap();

        // A fresh store over the same durable backend models a new process.
        let second = SessionStore::new(disk);
        let restored = second.restore().unwrap();
        assert_eq!(restored, before);
        assert!(second.is_authenticated());
    }

    #[test]
    fn logout_leaves_no_residual_credential() {
        let disk = Arc::new(MemoryCredentials::new());
        let session = SessionStore::new(disk.clone());
        session.login("tok-123".into(), user());
        session.logout();

        assert!(session.current().is_none());
        assert!(disk.get(TOKEN_KEY).is_none());
        assert!(disk.get(USER_KEY).is_none());

        let fresh = SessionStore::new(disk);
        assert!(fresh.restore().is_none());
    }

    #[test]
    fn restore_runs_once() {
        let disk = Arc::new(MemoryCredentials::new());
        let seed = SessionStore::new(disk.clone());
        seed.login("tok-123".into(), user());

        let session = SessionStore::new(disk.clone());
        assert!(session.restore().is_some());

        // Durable state mutated behind our back is not re-read.
        disk.remove(TOKEN_KEY);
        disk.remove(USER_KEY);
        assert!(session.restore().is_some());
        assert!(session.is_restored());
    }

    #[test]
    fn missing_key_means_anonymous() {
        let disk = Arc::new(MemoryCredentials::new());
        disk.set(TOKEN_KEY, "orphaned");

        let session = SessionStore::new(disk);
        assert!(session.restore().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn corrupt_user_record_clears_both_keys() {
        let disk = Arc::new(MemoryCredentials::new());
        disk.set(TOKEN_KEY, "tok");
        disk.set(USER_KEY, "{not json");

        let session = SessionStore::new(disk.clone());
        assert!(session.restore().is_none());
        assert!(disk.get(TOKEN_KEY).is_none());
    }
}
