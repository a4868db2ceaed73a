use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::session::SessionStorage;

/// In-memory SessionStorage for testing and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance standing in for the browser's localStorage
    /// when there is none.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<MemoryStorage> = OnceLock::new();
        GLOBAL.get_or_init(MemoryStorage::new).clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_map() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.write("k", "v");
        assert_eq!(b.read("k").as_deref(), Some("v"));
        b.remove("k");
        assert_eq!(a.read("k"), None);
    }
}
