use super::*;
use crate::net::error::ApiError;

#[test]
fn unauthenticated_response_expires_session_and_redirects_to_login() {
    let reaction = reaction_for(&ApiError::Authentication, "/api/v1/admin/roles", "/roles-management");
    assert_eq!(
        reaction,
        FailureReaction::ExpireSession {
            redirect: Some("/auth/login?returnUrl=/roles-management&sessionExpired=true".to_owned()),
        }
    );
}

#[test]
fn unauthenticated_response_while_on_login_screen_does_not_re_navigate() {
    let reaction = reaction_for(
        &ApiError::Authentication,
        "/api/v1/admin/roles",
        "/auth/login?returnUrl=/roles-management&sessionExpired=true",
    );
    // The session is still purged, but no second redirect is issued.
    assert_eq!(reaction, FailureReaction::ExpireSession { redirect: None });
}

#[test]
fn auth_flow_requests_are_exempt_from_the_reaction() {
    let reaction = reaction_for(&ApiError::Authentication, "/api/v1/admin/auth/login", "/auth/login");
    assert_eq!(reaction, FailureReaction::None);
}

#[test]
fn admin_user_endpoints_under_auth_prefix_are_not_exempt() {
    // `/api/v1/admin/auth/users` is a resource endpoint, not the auth flow.
    assert!(!is_auth_flow_path("/api/v1/admin/auth/users"));
    assert!(is_auth_flow_path("/api/v1/admin/auth/login"));
    assert!(is_auth_flow_path("/api/v1/admin/auth/logout"));
}

#[test]
fn forbidden_response_redirects_to_access_denied_with_context() {
    let reaction = reaction_for(&ApiError::Authorization, "/api/v1/admin/auth/users", "/users-management");
    assert_eq!(
        reaction,
        FailureReaction::AccessDenied { redirect: "/access-denied?returnUrl=/users-management".to_owned() }
    );
}

#[test]
fn other_failures_pass_through_without_side_effects() {
    for error in [
        ApiError::Status(500),
        ApiError::Network("offline".to_owned()),
        ApiError::Protocol("truncated body".to_owned()),
    ] {
        assert_eq!(reaction_for(&error, "/api/v1/mobile/offers", "/offers-list-management"), FailureReaction::None);
    }
}

#[test]
fn return_url_with_query_is_encoded_into_the_redirect() {
    let reaction = reaction_for(&ApiError::Authentication, "/api/v1/mobile/offers", "/offers-list-management?page=2");
    let FailureReaction::ExpireSession { redirect: Some(url) } = reaction else {
        panic!("expected a redirect");
    };
    assert_eq!(url, "/auth/login?returnUrl=/offers-list-management%3Fpage%3D2&sessionExpired=true");
}
