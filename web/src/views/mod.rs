//! Page views and the route guard.
//!
//! Every view wraps itself in [`Guarded`], which asks the central
//! [`RoutePolicy`] what to do with the current session before rendering
//! anything. Protected pages additionally wrap their content in
//! [`PageShell`] for the top bar and sidebar.

use dioxus::prelude::*;

use store::{Access, Gate, RoutePolicy};
use ui::{apply_logout, use_session, AppShell, NavItem};

use crate::Route;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod reset_password;
pub use reset_password::ResetPassword;

mod dashboard;
pub use dashboard::Dashboard;

mod records;
pub use records::Records;

mod record_detail;
pub use record_detail::RecordDetail;

mod invite;
pub use invite::Invite;

mod settings;
pub use settings::Settings;

/// Gatekeeper for a route. Renders its children only when the policy
/// allows; otherwise replaces the current route with the policy's
/// redirect target.
#[component]
pub fn Guarded(gate: Gate, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let state = session();

    if state.loading {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    match RoutePolicy::default().check(state.principal.as_ref(), gate) {
        Access::Allow => rsx! {
            {children}
        },
        Access::ToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Access::ToDashboard => {
            nav.replace(Route::Dashboard {});
            rsx! {}
        }
    }
}

/// Shell around a protected page: top bar, sidebar, navigation wiring.
#[component]
pub fn PageShell(active: NavItem, children: Element) -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    // The guard has already run; an empty principal here just means the
    // redirect is about to land.
    let Some(principal) = session().principal else {
        return rsx! {};
    };

    let on_navigate = move |item: NavItem| {
        match item {
            NavItem::Dashboard => nav.push(Route::Dashboard {}),
            NavItem::Records => nav.push(Route::Records {}),
            NavItem::Invite => nav.push(Route::Invite {}),
            NavItem::Settings => nav.push(Route::Settings {}),
        };
    };

    let on_logout = move |_| {
        apply_logout(&mut session);
        nav.push(Route::Login {});
    };

    rsx! {
        AppShell {
            principal,
            active,
            on_navigate,
            on_logout,
            {children}
        }
    }
}
