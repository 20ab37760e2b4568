//! # Browser `localStorage` backend — web persistence for the credential pair
//!
//! [`LocalStorage`] is the [`CredentialStore`] implementation used on the
//! **web platform**. It writes the `token`/`user` keys straight into
//! `window.localStorage`, which survives reloads and new tabs — the durable
//! storage the session is rehydrated from at process start.
//!
//! `LocalStorage` is a zero-size handle that looks the storage area up on
//! every call rather than caching it. All methods silently swallow storage
//! failures (quota, privacy mode, detached window): a failed read is "no
//! persisted session" and the app degrades to anonymous rather than
//! crashing.

use crate::session::CredentialStore;

/// `window.localStorage`-backed CredentialStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn area(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.area()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(area) = self.area() {
            if area.set_item(key, value).is_err() {
                tracing::warn!("localStorage write failed for {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(area) = self.area() {
            let _ = area.remove_item(key);
        }
    }
}