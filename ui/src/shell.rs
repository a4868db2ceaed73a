//! Application shell: fixed top bar plus sidebar navigation.
//!
//! The sidebar is driven by the route policy rather than ad-hoc role
//! checks: Invite only renders for principals the policy admits to
//! Admin-only routes, and Settings follows whichever gate the policy
//! assigns it.

use dioxus::prelude::*;
use store::models::Principal;
use store::{Access, Gate, RoutePolicy};

use crate::icons::{FaGear, FaHouse, FaList, FaRightFromBracket, FaUserPlus};
use crate::Icon;

/// Destinations reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Records,
    Invite,
    Settings,
}

impl NavItem {
    fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Records => "Records",
            NavItem::Invite => "Invite Viewer",
            NavItem::Settings => "Settings",
        }
    }
}

/// Layout wrapper for every protected page.
#[component]
pub fn AppShell(
    principal: Principal,
    active: NavItem,
    on_navigate: EventHandler<NavItem>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let policy = RoutePolicy::default();
    let mut items = vec![NavItem::Dashboard, NavItem::Records];
    if policy.check(Some(&principal), Gate::AdminOnly) == Access::Allow {
        items.push(NavItem::Invite);
    }
    if policy.check(Some(&principal), policy.settings_gate()) == Access::Allow {
        items.push(NavItem::Settings);
    }

    let avatar = api::config::image_url(principal.image_path.as_deref());

    rsx! {
        div {
            class: "shell",

            header {
                class: "topbar",
                span { class: "topbar-brand", "HomeLedger" }
                div {
                    class: "topbar-user",
                    img {
                        class: "topbar-avatar",
                        src: "{avatar}",
                        alt: "Profile",
                    }
                    span { class: "topbar-name", "{principal.full_name}" }
                    span { class: "topbar-role", "{principal.role:?}" }
                }
            }

            div {
                class: "shell-body",

                nav {
                    class: "sidebar",
                    for item in items {
                        button {
                            key: "{item.label()}",
                            class: if item == active { "sidebar-item active" } else { "sidebar-item" },
                            onclick: move |_| on_navigate.call(item),
                            span { class: "sidebar-icon", NavIcon { item } }
                            span { "{item.label()}" }
                        }
                    }
                    button {
                        class: "sidebar-item sidebar-logout",
                        onclick: move |_| on_logout.call(()),
                        span {
                            class: "sidebar-icon",
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        }
                        span { "Logout" }
                    }
                }

                main {
                    class: "shell-main",
                    {children}
                }
            }
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Dashboard => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
        NavItem::Records => rsx! { Icon { icon: FaList, width: 14, height: 14 } },
        NavItem::Invite => rsx! { Icon { icon: FaUserPlus, width: 14, height: 14 } },
        NavItem::Settings => rsx! { Icon { icon: FaGear, width: 14, height: 14 } },
    }
}
