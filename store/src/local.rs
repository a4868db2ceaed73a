//! Browser localStorage-backed session storage.
//!
//! All operations silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A blocked or unavailable localStorage
//! degrades to "no session" rather than crashing the page; the backend
//! remains the authority on authentication anyway.

use crate::session::SessionStorage;

/// localStorage-backed SessionStorage for the web platform.
#[derive(Clone, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
