use super::*;
use crate::net::types::Role;

#[test]
fn public_routes_always_allow() {
    assert_eq!(evaluate(RoutePolicy::Public, false, None, "/notfound", None), GuardOutcome::Allow);
}

#[test]
fn require_auth_redirects_anonymous_to_login_with_return_target() {
    let outcome = evaluate(RoutePolicy::RequireAuth, false, None, "/users-management", None);
    assert_eq!(
        outcome,
        GuardOutcome::Redirect {
            to: "/auth/login?returnUrl=/users-management&reason=not_authenticated".to_owned(),
            replace: false,
        }
    );
}

#[test]
fn require_auth_allows_authenticated_sessions() {
    let outcome = evaluate(RoutePolicy::RequireAuth, true, Some(Role::Admin), "/dashboard", None);
    assert_eq!(outcome, GuardOutcome::Allow);
}

#[test]
fn require_anonymous_allows_logged_out_visitors() {
    assert_eq!(
        evaluate(RoutePolicy::RequireAnonymous, false, None, "/auth/login", None),
        GuardOutcome::Allow
    );
}

#[test]
fn require_anonymous_redirects_authenticated_admin_to_default_landing() {
    let outcome = evaluate(RoutePolicy::RequireAnonymous, true, Some(Role::Admin), "/auth/login", None);
    assert_eq!(
        outcome,
        GuardOutcome::Redirect { to: "/dashboard".to_owned(), replace: true }
    );
}

#[test]
fn require_anonymous_honors_pending_return_url() {
    let outcome = evaluate(
        RoutePolicy::RequireAnonymous,
        true,
        Some(Role::Admin),
        "/auth/login",
        Some("/roles-management"),
    );
    assert_eq!(
        outcome,
        GuardOutcome::Redirect { to: "/roles-management".to_owned(), replace: true }
    );
}

#[test]
fn require_anonymous_filters_return_url_through_the_role_allowlist() {
    let outcome = evaluate(
        RoutePolicy::RequireAnonymous,
        true,
        Some(Role::Recruiter),
        "/auth/login",
        Some("/users-management"),
    );
    assert_eq!(
        outcome,
        GuardOutcome::Redirect { to: "/dashboard".to_owned(), replace: true }
    );
}

#[test]
fn require_role_redirects_insufficient_role_to_access_denied() {
    let outcome = evaluate(
        RoutePolicy::RequireRole(ADMIN_ONLY),
        true,
        Some(Role::JobSeeker),
        "/users-management",
        None,
    );
    assert_eq!(
        outcome,
        GuardOutcome::Redirect { to: "/access-denied".to_owned(), replace: false }
    );
}

#[test]
fn require_role_sends_anonymous_visitors_to_login_first() {
    let outcome = evaluate(RoutePolicy::RequireRole(ADMIN_ONLY), false, None, "/users-management", None);
    assert!(matches!(outcome, GuardOutcome::Redirect { ref to, .. } if to.starts_with("/auth/login?returnUrl=")));
}

#[test]
fn require_role_with_empty_list_behaves_like_require_auth() {
    assert_eq!(
        evaluate(RoutePolicy::RequireRole(ANY_ROLE), true, Some(Role::JobSeeker), "/dashboard", None),
        GuardOutcome::Allow
    );
}

#[test]
fn matching_role_is_allowed_through() {
    assert_eq!(
        evaluate(
            RoutePolicy::RequireRole(OFFER_MANAGERS),
            true,
            Some(Role::Recruiter),
            "/offers-list-management",
            None
        ),
        GuardOutcome::Allow
    );
}

#[test]
fn join_url_normalizes_optional_question_mark() {
    assert_eq!(join_url("/dashboard", ""), "/dashboard");
    assert_eq!(join_url("/offers", "page=2"), "/offers?page=2");
    assert_eq!(join_url("/offers", "?page=2"), "/offers?page=2");
}
