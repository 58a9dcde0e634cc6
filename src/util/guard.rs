//! Route guard evaluated before a screen is allowed to render.
//!
//! DESIGN
//! ======
//! One configurable guard replaces the three near-identical policies the
//! screens need (require-auth, require-anonymous, require-role). The
//! decision itself is a pure function of session state plus route
//! metadata; `install` wires it into the reactive graph so a logout (or a
//! 401-triggered session purge) immediately re-evaluates the active route.
//! Guards only observe the session, they never mutate it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::redirect;

/// Roles allowed into the admin-only management sections.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
/// Roles allowed into the offer management section.
pub const OFFER_MANAGERS: &[Role] = &[Role::Admin, Role::Recruiter];
/// No role restriction beyond being authenticated.
pub const ANY_ROLE: &[Role] = &[];

/// Access policy attached to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    /// No access check.
    Public,
    /// Any authenticated session.
    RequireAuth,
    /// Only unauthenticated visitors (login/register screens).
    RequireAnonymous,
    /// Authenticated and holding one of the listed roles; an empty list
    /// behaves like `RequireAuth`.
    RequireRole(&'static [Role]),
}

/// Result of evaluating a policy against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect { to: String, replace: bool },
}

/// Decide whether a navigation to `target_url` may proceed.
///
/// `pending_return_url` is the `returnUrl` query parameter of the current
/// location, consumed by the require-anonymous case so an already
/// authenticated visitor lands where they originally meant to go.
pub fn evaluate(
    policy: RoutePolicy,
    authenticated: bool,
    role: Option<Role>,
    target_url: &str,
    pending_return_url: Option<&str>,
) -> GuardOutcome {
    match policy {
        RoutePolicy::Public => GuardOutcome::Allow,
        RoutePolicy::RequireAuth => require_auth(authenticated, target_url),
        RoutePolicy::RequireAnonymous => {
            if !authenticated {
                return GuardOutcome::Allow;
            }
            // The pending return URL is user-controllable; when a role is
            // known it goes through the same allowlist as the login flow.
            let to = match role {
                Some(role) => redirect::post_login_destination(pending_return_url, role),
                None => pending_return_url
                    .filter(|url| !url.is_empty())
                    .unwrap_or(redirect::DEFAULT_LANDING)
                    .to_owned(),
            };
            GuardOutcome::Redirect { to, replace: true }
        }
        RoutePolicy::RequireRole(allowed) => {
            if !authenticated {
                return require_auth(false, target_url);
            }
            if allowed.is_empty() {
                return GuardOutcome::Allow;
            }
            match role {
                Some(role) if allowed.contains(&role) => GuardOutcome::Allow,
                _ => GuardOutcome::Redirect {
                    to: redirect::ACCESS_DENIED_PATH.to_owned(),
                    replace: false,
                },
            }
        }
    }
}

/// Install `policy` for the calling route component.
///
/// Re-evaluates whenever the published user changes, so the screen is
/// blocked as soon as the session is cleared underneath it.
pub fn install(policy: RoutePolicy, session: SessionStore) {
    let navigate = use_navigate();
    let location = use_location();
    let query = use_query_map();
    Effect::new(move || {
        // Subscribe to user changes; authentication itself is read from
        // storage at evaluation time.
        let _ = session.user_signal().get();
        let target = join_url(&location.pathname.get(), &location.search.get());
        let return_url = query.get().get("returnUrl");
        let outcome = evaluate(
            policy,
            session.is_authenticated(),
            session.current_role(),
            &target,
            return_url.as_deref(),
        );
        if let GuardOutcome::Redirect { to, replace } = outcome {
            navigate(&to, NavigateOptions { replace, ..Default::default() });
        }
    });
}

/// Rejoin a pathname and query string into a single relative URL.
pub(crate) fn join_url(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

fn require_auth(authenticated: bool, target_url: &str) -> GuardOutcome {
    if authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect {
            to: redirect::login_redirect_for_guard(target_url),
            replace: false,
        }
    }
}
