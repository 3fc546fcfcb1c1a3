use super::*;

#[test]
fn valid_credentials_pass() {
    assert!(validate("staff@reapp.org", "s3cret-pass").is_empty());
}

#[test]
fn empty_email_is_required() {
    let errors = validate("", "s3cret-pass");
    assert_eq!(errors.email, Some("Email is required"));
    assert!(errors.password.is_none());
}

#[test]
fn whitespace_email_counts_as_empty() {
    let errors = validate("   ", "s3cret-pass");
    assert_eq!(errors.email, Some("Email is required"));
}

#[test]
fn email_must_look_like_an_address() {
    let errors = validate("staff.reapp.org", "s3cret-pass");
    assert_eq!(errors.email, Some("Enter a valid email"));
}

#[test]
fn password_is_required() {
    let errors = validate("staff@reapp.org", "");
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn short_password_is_rejected() {
    let errors = validate("staff@reapp.org", "seven77");
    assert_eq!(errors.password, Some("Password must be at least 8 characters"));
}

#[test]
fn eight_characters_is_enough() {
    assert!(validate("staff@reapp.org", "eight888").is_empty());
}

#[test]
fn both_fields_can_fail_at_once() {
    let errors = validate("", "");
    assert!(errors.email.is_some());
    assert!(errors.password.is_some());
    assert!(!errors.is_empty());
}
