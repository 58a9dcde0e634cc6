use super::*;
use crate::net::error::ApiError;
use crate::net::types::{CandidateProfile, CompanyProfile, Role, User, VerificationStatus};

fn logged_in_user() -> User {
    User {
        id: 1,
        email: "a@b.c".to_owned(),
        full_name: "Ada".to_owned(),
        role: Role::Admin,
        is_first_login: false,
        active: true,
        verification_status: VerificationStatus::Verified,
        created_at: String::new(),
        updated_at: String::new(),
        phone_number: None,
        profile_picture_url: None,
        company: CompanyProfile::default(),
        candidate: CandidateProfile::default(),
    }
}

#[test]
fn validate_credentials_trims_email_and_requires_at_sign() {
    let request = validate_credentials("  user@example.com  ", "secret1").expect("valid");
    assert_eq!(request.email, "user@example.com");
    assert!(validate_credentials("not-an-email", "secret1").is_err());
    assert!(validate_credentials("   ", "secret1").is_err());
}

#[test]
fn validate_credentials_enforces_minimum_password_length() {
    assert!(validate_credentials("a@b.c", "12345").is_err());
    assert!(validate_credentials("a@b.c", "123456").is_ok());
}

#[test]
fn rejected_credentials_show_a_neutral_message() {
    assert_eq!(login_error_message(&ApiError::Authentication), "Incorrect email or password.");
    assert_eq!(login_error_message(&ApiError::Authorization), "Incorrect email or password.");
}

#[test]
fn network_failures_keep_the_generic_retry_message() {
    assert!(login_error_message(&ApiError::Network("timeout".to_owned())).contains("Check your connection"));
}

#[test]
fn verified_active_account_has_no_notice_and_navigates() {
    let user = logged_in_user();
    assert_eq!(account_notice(&user), None);
    assert!(!blocks_navigation(&user));
}

#[test]
fn first_login_blocks_navigation_with_a_notice() {
    let mut user = logged_in_user();
    user.is_first_login = true;
    assert!(blocks_navigation(&user));
    assert!(account_notice(&user).expect("notice").contains("change your password"));
}

#[test]
fn deactivated_account_blocks_navigation() {
    let mut user = logged_in_user();
    user.active = false;
    assert!(blocks_navigation(&user));
    assert!(account_notice(&user).expect("notice").contains("deactivated"));
}

#[test]
fn pending_verification_warns_but_does_not_block() {
    let mut user = logged_in_user();
    user.verification_status = VerificationStatus::Pending;
    assert!(!blocks_navigation(&user));
    assert!(account_notice(&user).expect("notice").contains("pending verification"));
}
