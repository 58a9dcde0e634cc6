use super::*;

#[test]
fn valid_registration_is_normalized() {
    let request = validate_registration(" new@user.example ", " New User ", "secret1", "secret1").expect("valid");
    assert_eq!(request.email, "new@user.example");
    assert_eq!(request.full_name, "New User");
}

#[test]
fn mismatched_passwords_are_rejected() {
    assert_eq!(
        validate_registration("a@b.c", "Ada", "secret1", "secret2"),
        Err("Passwords do not match.")
    );
}

#[test]
fn missing_fields_are_rejected_in_order() {
    assert_eq!(validate_registration("", "Ada", "secret1", "secret1"), Err("Enter a valid email address."));
    assert_eq!(validate_registration("a@b.c", "  ", "secret1", "secret1"), Err("Enter your full name."));
    assert_eq!(
        validate_registration("a@b.c", "Ada", "short", "short"),
        Err("Password must be at least 6 characters.")
    );
}
