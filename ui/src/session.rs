//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] reads the persisted session once on mount and
//! exposes it as a context signal. The `apply_*` helpers are the only
//! mutation paths: each one writes through to durable storage first, then
//! updates the signal, so the stored session and the rendered session
//! never disagree.

use dioxus::prelude::*;
use store::models::Principal;

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub principal: Option<Principal>,
    pub token: Option<String>,
    /// True until the persisted session has been read.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            principal: None,
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that manages session state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    // Read the persisted session once on mount. Storage is synchronous,
    // so the first routed render already sees the real state.
    use_effect(move || {
        let session = store::session::shared().load();
        tracing::debug!(authenticated = session.is_authenticated(), "session loaded");
        state.set(SessionState {
            principal: session.principal,
            token: session.token,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist a fresh login and reflect it in the context.
pub fn apply_login(state: &mut Signal<SessionState>, principal: Principal, token: String) {
    store::session::shared().login(&principal, &token);
    state.set(SessionState {
        principal: Some(principal),
        token: Some(token),
        loading: false,
    });
}

/// Clear the persisted session and the context.
pub fn apply_logout(state: &mut Signal<SessionState>) {
    store::session::shared().logout();
    state.set(SessionState {
        principal: None,
        token: None,
        loading: false,
    });
}

/// Replace the stored principal (after a profile update), keeping the token.
pub fn apply_principal(state: &mut Signal<SessionState>, principal: Principal) {
    store::session::shared().update_principal(&principal);
    let current = state();
    state.set(SessionState {
        principal: Some(principal),
        ..current
    });
}
