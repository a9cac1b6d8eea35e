//! Persisted client-side session state.
//!
//! Browser storage is abstracted behind a small key-value interface so the
//! session core is testable without a real storage backend. Two slots are
//! used: the raw token string and a cached identity snapshot; they are
//! always cleared together.

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage slot holding the raw token string.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage slot holding the cached identity snapshot (JSON).
pub const CURRENT_USER_KEY: &str = "current_user";

/// Key-value store for the persisted token/identity pair.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store, used in tests and headless embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("store lock").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().expect("store lock").remove(key);
    }
}
