//! Post-login landing and redirect-URL policy.
//!
//! DESIGN
//! ======
//! The role/path table lives here and nowhere else: guards, the menu, and
//! the login screen all consult the same allowlists, so a captured
//! `returnUrl` (attacker/user-controllable query input) can never redirect
//! a fresh session into a section its role cannot reach.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::fmt::Write as _;

use crate::net::types::Role;

/// Landing page for an authenticated session with no pending return URL.
pub const DEFAULT_LANDING: &str = "/dashboard";
/// Login screen path, also the skip target for the 401 redirect loop check.
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const ACCESS_DENIED_PATH: &str = "/access-denied";
pub const NOT_FOUND_PATH: &str = "/notfound";

/// Path prefixes a role may be redirected into after login.
pub fn allowed_prefixes(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &[
            "/dashboard",
            "/users-management",
            "/roles-management",
            "/skill-types-management",
            "/offers-list-management",
            "/notifications-management",
        ],
        Role::Recruiter => &["/dashboard", "/offers-list-management", "/notifications-management"],
        Role::JobSeeker => &["/dashboard", "/notifications-management"],
    }
}

/// Default landing path for a role.
pub fn default_path_for(role: Role) -> &'static str {
    match role {
        Role::Admin | Role::Recruiter | Role::JobSeeker => DEFAULT_LANDING,
    }
}

/// Whether `path` falls under one of the prefixes allowlisted for `role`.
pub fn is_path_allowed(role: Role, path: &str) -> bool {
    allowed_prefixes(role).iter().any(|prefix| path.starts_with(prefix))
}

/// Final destination after a successful login.
///
/// The captured return URL is honored only when it is allowlisted for the
/// role; anything else falls back to the role default.
pub fn post_login_destination(return_url: Option<&str>, role: Role) -> String {
    match return_url {
        Some(url) if !url.is_empty() && is_path_allowed(role, url) => url.to_owned(),
        _ => default_path_for(role).to_owned(),
    }
}

/// Login redirect issued by a guard blocking an unauthenticated navigation.
pub fn login_redirect_for_guard(target_url: &str) -> String {
    format!(
        "{LOGIN_PATH}?returnUrl={}&reason=not_authenticated",
        encode_query_value(target_url)
    )
}

/// Login redirect issued by the HTTP layer after a 401 on a live session.
pub fn session_expired_redirect(current_url: &str) -> String {
    format!(
        "{LOGIN_PATH}?returnUrl={}&sessionExpired=true",
        encode_query_value(current_url)
    )
}

/// Access-denied redirect carrying the attempted URL as context.
pub fn access_denied_redirect(current_url: &str) -> String {
    format!("{ACCESS_DENIED_PATH}?returnUrl={}", encode_query_value(current_url))
}

/// Percent-encode a query-parameter value, keeping `/` readable so path
/// return URLs stay recognizable in the address bar.
pub fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => out.push(byte as char),
            other => {
                let _ = write!(out, "%{other:02X}");
            }
        }
    }
    out
}
