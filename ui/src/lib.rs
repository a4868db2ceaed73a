//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    apply_login, apply_logout, apply_principal, use_session, SessionProvider, SessionState,
};

mod alert;
pub use alert::{Alert, AlertLevel};

mod shell;
pub use shell::{AppShell, NavItem};

mod months;
pub use months::current_month;
