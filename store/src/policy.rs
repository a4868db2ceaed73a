//! # Route access policy
//!
//! One capability function instead of role string comparisons scattered
//! through the pages. Every route declares a [`Gate`]; the router asks
//! [`RoutePolicy::check`] what to do with the current principal and either
//! renders the page or redirects.
//!
//! The two-state session machine from the routing contract:
//! - Unauthenticated + protected path → redirect to login.
//! - Authenticated + public path (login/register/forgot/reset) → redirect
//!   to the dashboard.
//! - Authenticated non-Admin + Admin-only path → redirect to the dashboard
//!   (silent, not an error).

use crate::models::Principal;

/// Access class a route declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Login, register, forgot/reset password.
    Public,
    /// Any authenticated principal.
    Protected,
    /// Admin principals only.
    AdminOnly,
}

/// What the router should do with a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    ToLogin,
    ToDashboard,
}

/// Policy knobs that varied across revisions of the product. Whether
/// `/settings` is Admin-only is deliberately configurable rather than
/// fixed; the default leaves it open to all authenticated users.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoutePolicy {
    pub settings_admin_only: bool,
}

impl RoutePolicy {
    /// Gate for the settings route under this policy.
    pub fn settings_gate(&self) -> Gate {
        if self.settings_admin_only {
            Gate::AdminOnly
        } else {
            Gate::Protected
        }
    }

    pub fn check(&self, principal: Option<&Principal>, gate: Gate) -> Access {
        match (principal, gate) {
            (None, Gate::Public) => Access::Allow,
            (None, _) => Access::ToLogin,
            (Some(_), Gate::Public) => Access::ToDashboard,
            (Some(_), Gate::Protected) => Access::Allow,
            (Some(p), Gate::AdminOnly) => {
                if p.role.is_admin() {
                    Access::Allow
                } else {
                    Access::ToDashboard
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn principal(role: Role) -> Principal {
        Principal {
            id: 1,
            email: "p@home.example".into(),
            full_name: "P".into(),
            role,
            image_path: None,
        }
    }

    #[test]
    fn unauthenticated_is_sent_to_login() {
        let policy = RoutePolicy::default();
        assert_eq!(policy.check(None, Gate::Protected), Access::ToLogin);
        assert_eq!(policy.check(None, Gate::AdminOnly), Access::ToLogin);
        assert_eq!(policy.check(None, Gate::Public), Access::Allow);
    }

    #[test]
    fn authenticated_is_bounced_off_public_pages() {
        let policy = RoutePolicy::default();
        let p = principal(Role::Viewer);
        assert_eq!(policy.check(Some(&p), Gate::Public), Access::ToDashboard);
    }

    #[test]
    fn viewer_is_redirected_from_admin_routes() {
        let policy = RoutePolicy::default();
        let viewer = principal(Role::Viewer);
        let admin = principal(Role::Admin);
        assert_eq!(policy.check(Some(&viewer), Gate::AdminOnly), Access::ToDashboard);
        assert_eq!(policy.check(Some(&admin), Gate::AdminOnly), Access::Allow);
        assert_eq!(policy.check(Some(&viewer), Gate::Protected), Access::Allow);
    }

    #[test]
    fn settings_gating_is_configurable() {
        let open = RoutePolicy::default();
        let gated = RoutePolicy {
            settings_admin_only: true,
        };
        let viewer = principal(Role::Viewer);

        assert_eq!(open.settings_gate(), Gate::Protected);
        assert_eq!(
            open.check(Some(&viewer), open.settings_gate()),
            Access::Allow
        );

        assert_eq!(gated.settings_gate(), Gate::AdminOnly);
        assert_eq!(
            gated.check(Some(&viewer), gated.settings_gate()),
            Access::ToDashboard
        );
    }
}
