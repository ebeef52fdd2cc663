//! Persisted credential store behind an injectable key/value interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's `localStorage` is shared, mutable, ambient state: any tab
//! or same-origin script may change it at any time, and two near-simultaneous
//! writes race last-write-wins. Guards and session-aware components receive
//! the store through context instead of reaching for the global, so tests can
//! inject [`MemoryStore`].
//!
//! Key names are a persisted contract shared with other deployments of the
//! site and must stay stable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// General-session bearer token (raw string).
pub const TOKEN_KEY: &str = "token";
/// General-session profile blob (JSON).
pub const USER_KEY: &str = "user";
/// Admin-session bearer token (raw string).
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
/// Admin-session profile blob (JSON).
pub const ADMIN_USER_KEY: &str = "adminUser";

/// Every key the session subsystem persists. Logout and corruption recovery
/// clear all of them together so no namespace is left with an orphaned pair.
pub const CREDENTIAL_KEYS: [&str; 4] = [TOKEN_KEY, USER_KEY, ADMIN_TOKEN_KEY, ADMIN_USER_KEY];

/// Minimal key/value contract over the persisted credential record.
///
/// No transactionality: concurrent writers race last-write-wins, and a value
/// read here can be stale by the time an action based on it completes.
pub trait CredentialStore: Send + Sync {
    /// Read the raw value under `key`, if present.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Delete `key`; a no-op when the key is absent.
    fn remove(&self, key: &str);
}

/// Store handle shared through Leptos context.
pub type SharedStore = Arc<dyn CredentialStore>;

/// `localStorage`-backed store. Methods no-op outside the browser.
pub struct BrowserStore;

impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store used by tests and as the non-browser fallback.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Build the store the app runs against: `localStorage` in the browser,
/// an empty in-memory store elsewhere.
pub fn default_store() -> SharedStore {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(MemoryStore::new())
    }
}

/// Remove every credential key, both namespaces together.
pub fn clear_credentials(store: &dyn CredentialStore) {
    for key in CREDENTIAL_KEYS {
        store.remove(key);
    }
}
