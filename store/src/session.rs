//! # Client-side session persistence
//!
//! The session is the only durable client-side state: the authenticated
//! [`Principal`] plus the bearer token, written under the `"user"` and
//! `"token"` keys of whatever [`SessionStorage`] the platform provides
//! (browser localStorage on wasm, a process-wide in-memory map elsewhere).
//!
//! [`SessionStore::load`] validates shape on read: a missing or
//! structurally invalid user (unparseable JSON, or an id of zero) is
//! treated as unauthenticated and clears the storage. Every mutation
//! rewrites durable storage synchronously.
//!
//! No token expiry is checked client-side; a stale token is only
//! discovered when a subsequent API call fails.

use crate::models::Principal;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

/// Durable string-keyed storage for the session. Implementations swallow
/// platform errors; a broken storage degrades to "no session".
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The session as loaded from storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub principal: Option<Principal>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}

/// Typed facade over a [`SessionStorage`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted session. Anything malformed clears the storage
    /// and yields the unauthenticated session.
    pub fn load(&self) -> Session {
        let Some(raw_user) = self.storage.read(USER_KEY) else {
            // No user means no session; drop any stray token as well.
            self.logout();
            return Session::default();
        };

        let principal = serde_json::from_str::<Principal>(&raw_user)
            .ok()
            .filter(Principal::is_valid);

        let Some(principal) = principal else {
            self.logout();
            return Session::default();
        };

        Session {
            principal: Some(principal),
            token: self.storage.read(TOKEN_KEY),
        }
    }

    /// Persist a freshly authenticated principal and its bearer token.
    pub fn login(&self, principal: &Principal, token: &str) {
        if let Ok(json) = serde_json::to_string(principal) {
            self.storage.write(USER_KEY, &json);
        }
        self.storage.write(TOKEN_KEY, token);
    }

    /// Rewrite the stored principal, keeping the token. Used after profile
    /// updates so the next load reflects the new name/image.
    pub fn update_principal(&self, principal: &Principal) {
        if let Ok(json) = serde_json::to_string(principal) {
            self.storage.write(USER_KEY, &json);
        }
    }

    pub fn logout(&self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(TOKEN_KEY);
    }
}

/// The storage shared by the whole app on this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn shared() -> SessionStore<crate::BrowserStorage> {
    SessionStore::new(crate::BrowserStorage)
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn shared() -> SessionStore<crate::MemoryStorage> {
    SessionStore::new(crate::MemoryStorage::global())
}

/// Bearer token of the persisted session, if any. Attached to every
/// outgoing API request.
pub fn active_token() -> Option<String> {
    shared().load().token
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryStorage;

    fn principal() -> Principal {
        Principal {
            id: 7,
            email: "admin@home.example".into(),
            full_name: "Asma Khan".into(),
            role: Role::Admin,
            image_path: None,
        }
    }

    #[test]
    fn empty_storage_loads_unauthenticated() {
        let store = SessionStore::new(MemoryStorage::new());
        let session = store.load();
        assert!(!session.is_authenticated());
        assert_eq!(session.token, None);
    }

    #[test]
    fn login_survives_a_fresh_load() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).login(&principal(), "tok-123");

        // A second store over the same storage sees the session, the way a
        // page reload re-reads localStorage.
        let session = SessionStore::new(storage).load();
        assert_eq!(session.principal, Some(principal()));
        assert_eq!(session.token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn corrupt_user_clears_storage() {
        let storage = MemoryStorage::new();
        storage.write(USER_KEY, "{not json");
        storage.write(TOKEN_KEY, "tok");

        let session = SessionStore::new(storage.clone()).load();
        assert!(!session.is_authenticated());
        assert_eq!(storage.read(USER_KEY), None);
        assert_eq!(storage.read(TOKEN_KEY), None);
    }

    #[test]
    fn user_without_id_is_rejected() {
        let storage = MemoryStorage::new();
        storage.write(
            USER_KEY,
            r#"{"id": 0, "email": "x@y.z", "fullName": "X", "role": "Viewer"}"#,
        );

        let session = SessionStore::new(storage.clone()).load();
        assert!(!session.is_authenticated());
        assert_eq!(storage.read(USER_KEY), None);
    }

    #[test]
    fn stray_token_without_user_is_dropped() {
        let storage = MemoryStorage::new();
        storage.write(TOKEN_KEY, "orphan");

        let session = SessionStore::new(storage.clone()).load();
        assert_eq!(session.token, None);
        assert_eq!(storage.read(TOKEN_KEY), None);
    }

    #[test]
    fn update_principal_keeps_token() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage);
        store.login(&principal(), "tok-123");

        let mut updated = principal();
        updated.full_name = "Asma K.".into();
        store.update_principal(&updated);

        let session = store.load();
        assert_eq!(
            session.principal.map(|p| p.full_name).as_deref(),
            Some("Asma K.")
        );
        assert_eq!(session.token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn logout_clears_everything() {
        let store = SessionStore::new(MemoryStorage::new());
        store.login(&principal(), "tok-123");
        store.logout();
        assert!(!store.load().is_authenticated());
    }
}
