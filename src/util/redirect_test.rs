use super::*;
use crate::net::types::Role;

#[test]
fn admin_keeps_allowlisted_return_url() {
    assert_eq!(
        post_login_destination(Some("/users-management"), Role::Admin),
        "/users-management"
    );
}

#[test]
fn recruiter_return_url_outside_allowlist_falls_back_to_default() {
    assert_eq!(post_login_destination(Some("/users-management"), Role::Recruiter), DEFAULT_LANDING);
}

#[test]
fn job_seeker_may_return_to_notifications() {
    assert_eq!(
        post_login_destination(Some("/notifications-management"), Role::JobSeeker),
        "/notifications-management"
    );
}

#[test]
fn missing_or_empty_return_url_uses_role_default() {
    assert_eq!(post_login_destination(None, Role::Recruiter), DEFAULT_LANDING);
    assert_eq!(post_login_destination(Some(""), Role::Admin), DEFAULT_LANDING);
}

#[test]
fn prefix_match_covers_detail_routes() {
    assert!(is_path_allowed(Role::Recruiter, "/offers-list-management/42/edit"));
    assert!(!is_path_allowed(Role::JobSeeker, "/offers-list-management/42"));
}

#[test]
fn guard_login_redirect_carries_target_and_reason() {
    assert_eq!(
        login_redirect_for_guard("/roles-management"),
        "/auth/login?returnUrl=/roles-management&reason=not_authenticated"
    );
}

#[test]
fn session_expired_redirect_flags_expiry() {
    assert_eq!(
        session_expired_redirect("/dashboard"),
        "/auth/login?returnUrl=/dashboard&sessionExpired=true"
    );
}

#[test]
fn encode_query_value_escapes_query_metacharacters() {
    assert_eq!(encode_query_value("/offers?page=2&size=10"), "/offers%3Fpage%3D2%26size%3D10");
    assert_eq!(encode_query_value("plain/path"), "plain/path");
}
