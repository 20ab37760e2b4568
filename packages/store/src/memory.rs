use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::CredentialStore;

/// In-memory CredentialStore for tests and non-web fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentials {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_roundtrip() {
        let store = MemoryCredentials::new();
        assert!(store.get("token").is_none());

        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        store.set("token", "def");
        assert_eq!(store.get("token").as_deref(), Some("def"));

        store.remove("token");
        assert!(store.get("token").is_none());
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryCredentials::new();
        let alias = store.clone();
        store.set("user", "{}");
        assert_eq!(alias.get("user").as_deref(), Some("{}"));
    }
}
