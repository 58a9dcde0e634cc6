use super::*;
use crate::net::error::ApiError;
use crate::net::types::{CandidateProfile, CompanyProfile, Role, User, VerificationStatus};
use crate::util::guard::{self, GuardOutcome, RoutePolicy};
use crate::util::storage;

fn sample_user(role: Role) -> User {
    User {
        id: 7,
        email: "admin@jobs.example".to_owned(),
        full_name: "Ada Admin".to_owned(),
        role,
        is_first_login: false,
        active: true,
        verification_status: VerificationStatus::Verified,
        created_at: "2026-01-01T00:00:00.000Z".to_owned(),
        updated_at: "2026-01-01T00:00:00.000Z".to_owned(),
        phone_number: None,
        profile_picture_url: None,
        company: CompanyProfile::default(),
        candidate: CandidateProfile::default(),
    }
}

#[test]
fn token_with_three_segments_round_trips() {
    let store = SessionStore::new();
    store.set_token("header.payload.signature");
    assert_eq!(store.token().as_deref(), Some("header.payload.signature"));
    assert!(store.is_authenticated());
}

#[test]
fn malformed_stored_token_is_purged_on_read() {
    let store = SessionStore::new();
    store.set_token("not-a-compact-token");
    assert_eq!(store.token(), None);
    // Purged, not merely hidden: the raw value is gone from storage.
    assert_eq!(storage::get_item("auth_token"), None);
    assert!(!store.is_authenticated());
}

#[test]
fn two_or_four_segment_tokens_are_rejected() {
    for raw in ["a.b", "a.b.c.d", "   "] {
        let store = SessionStore::new();
        store.set_token(raw);
        assert_eq!(store.token(), None, "token {raw:?} should be rejected");
    }
}

#[test]
fn set_user_rejects_missing_required_fields_without_persisting() {
    let store = SessionStore::new();
    store.set_user(sample_user(Role::Admin)).expect("valid user");

    let mut incomplete = sample_user(Role::Admin);
    incomplete.email = String::new();
    incomplete.full_name = "  ".to_owned();
    let err = store.set_user(incomplete).expect_err("incomplete user");
    assert!(matches!(err, ApiError::Validation(ref msg) if msg.contains("email") && msg.contains("fullName")));

    // Storage still holds the previous valid record.
    let stored: User = serde_json::from_str(&storage::get_item("user_data").expect("stored")).expect("parses");
    assert_eq!(stored.email, "admin@jobs.example");
    assert_eq!(store.current_user().expect("published").email, "admin@jobs.example");
}

#[test]
fn set_user_fills_bookkeeping_defaults() {
    let store = SessionStore::new();
    let mut user = sample_user(Role::Recruiter);
    user.created_at = String::new();
    user.updated_at = String::new();
    let saved = store.set_user(user).expect("valid user");
    assert!(!saved.created_at.is_empty());
    assert!(!saved.updated_at.is_empty());
}

#[test]
fn remove_user_publishes_none() {
    let store = SessionStore::new();
    store.set_user(sample_user(Role::Admin)).expect("valid user");
    store.remove_user();
    assert_eq!(store.current_user(), None);
    assert_eq!(storage::get_item("user_data"), None);
}

#[test]
fn late_subscriber_observes_last_published_value() {
    let store = SessionStore::new();
    store.set_user(sample_user(Role::JobSeeker)).expect("valid user");
    // A copy handed out later replays the current value immediately.
    let copy = store;
    assert_eq!(copy.user_signal().get_untracked().expect("user").role, Role::JobSeeker);
}

#[test]
fn corrupt_stored_user_json_is_purged_on_load() {
    storage::set_item("user_data", "{not json");
    let store = SessionStore::new();
    assert_eq!(store.current_user(), None);
    assert_eq!(storage::get_item("user_data"), None);
}

#[test]
fn stored_user_missing_required_fields_is_purged_on_load() {
    storage::set_item("user_data", r#"{"id":0,"email":"","fullName":"","role":"ADMIN"}"#);
    let store = SessionStore::new();
    assert_eq!(store.current_user(), None);
    assert_eq!(storage::get_item("user_data"), None);
}

#[test]
fn clear_logs_out_and_protected_routes_redirect_again() {
    let store = SessionStore::new();
    store.set_token("h.p.s");
    store.set_user(sample_user(Role::Admin)).expect("valid user");
    assert!(store.is_authenticated());

    store.clear();
    assert!(!store.is_authenticated());
    assert_eq!(store.current_user(), None);

    let outcome = guard::evaluate(
        RoutePolicy::RequireAuth,
        store.is_authenticated(),
        store.current_role(),
        "/users-management",
        None,
    );
    assert!(matches!(outcome, GuardOutcome::Redirect { ref to, .. } if to.starts_with("/auth/login")));
}
