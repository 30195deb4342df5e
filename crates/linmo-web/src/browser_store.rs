//! localStorage-backed implementation of the core storage capability.

use linmo_core::KeyValue;
use web_sys::Storage;

/// Persists progress in `window.localStorage`. When storage is unavailable
/// (private browsing, sandboxed frame) the session still runs, it just
/// starts over next visit.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, progress will not persist");
        }
        Self { storage }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValue for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not persist {key}");
            }
        }
    }
}
