use super::*;

#[test]
fn success_statuses_do_not_classify_as_errors() {
    assert_eq!(ApiError::from_status(200), None);
    assert_eq!(ApiError::from_status(204), None);
}

#[test]
fn auth_statuses_classify_to_dedicated_variants() {
    assert_eq!(ApiError::from_status(401), Some(ApiError::Authentication));
    assert_eq!(ApiError::from_status(403), Some(ApiError::Authorization));
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(ApiError::from_status(404), Some(ApiError::Status(404)));
    assert_eq!(ApiError::from_status(500), Some(ApiError::Status(500)));
}

#[test]
fn user_message_covers_common_statuses() {
    assert!(ApiError::Status(429).user_message().contains("Too many attempts"));
    assert!(ApiError::Status(418).user_message().contains("418"));
    assert!(ApiError::Authentication.user_message().contains("sign in"));
}
