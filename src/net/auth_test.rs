use super::*;
use crate::net::error::ApiError;
use crate::net::types::{LoginResponse, Role, VerificationStatus};
use crate::state::session::SessionStore;

fn login_response() -> LoginResponse {
    LoginResponse {
        token: "header.payload.signature".to_owned(),
        token_type: Some("Bearer".to_owned()),
        id: 12,
        email: "rita@jobs.example".to_owned(),
        full_name: "Rita Recruiter".to_owned(),
        role: "RECRUITER".to_owned(),
        is_first_login: Some(false),
        active: None,
        verification_status: None,
        created_at: None,
        updated_at: None,
        message: None,
        success: Some(true),
    }
}

#[test]
fn normalization_defaults_only_apply_when_server_omits_fields() {
    let user = user_from_login(&login_response()).expect("valid payload");
    assert!(user.active);
    assert_eq!(user.verification_status, VerificationStatus::Pending);
}

#[test]
fn normalization_prefers_server_provided_account_state() {
    let mut response = login_response();
    response.active = Some(false);
    response.verification_status = Some(VerificationStatus::Rejected);
    let user = user_from_login(&response).expect("valid payload");
    // A deactivated or rejected account must not be masked at login time.
    assert!(!user.active);
    assert_eq!(user.verification_status, VerificationStatus::Rejected);
}

#[test]
fn unknown_role_is_a_protocol_error() {
    let mut response = login_response();
    response.role = "SUPERUSER".to_owned();
    let err = user_from_login(&response).expect_err("unknown role");
    assert!(matches!(err, ApiError::Protocol(ref msg) if msg.contains("SUPERUSER")));
}

#[test]
fn successful_login_populates_token_then_user() {
    let session = SessionStore::new();
    let user = finish_login(session, &login_response()).expect("login commits");
    assert!(session.is_authenticated());
    assert_eq!(user.role, Role::Recruiter);
    assert_eq!(session.current_user().expect("published").email, "rita@jobs.example");
    // Bookkeeping defaults were filled in before persisting.
    assert!(!session.current_user().expect("published").created_at.is_empty());
}

#[test]
fn missing_token_fails_with_protocol_error_and_leaves_session_untouched() {
    let session = SessionStore::new();
    let mut response = login_response();
    response.token = "   ".to_owned();
    let err = finish_login(session, &response).expect_err("no token");
    assert!(matches!(err, ApiError::Protocol(_)));
    assert!(!session.is_authenticated());
    assert_eq!(session.current_user(), None);
}

#[test]
fn unusable_user_payload_does_not_persist_a_token() {
    let session = SessionStore::new();
    let mut response = login_response();
    response.email = String::new();
    response.full_name = String::new();
    let err = finish_login(session, &response).expect_err("unusable user");
    assert!(matches!(err, ApiError::Validation(_)));
    // Validation happens before the token write.
    assert!(!session.is_authenticated());
}
