use super::*;

#[test]
fn email_shape_is_checked() {
    assert!(is_valid_email("ops@example.com"));
    assert!(is_valid_email("a.b+c@mail.example.co"));
    assert!(!is_valid_email("ops@example"));
    assert!(!is_valid_email("ops.example.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ops@.com"));
    assert!(!is_valid_email("ops@example."));
    assert!(!is_valid_email("o ps@example.com"));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ops@example.com ", "secret"),
        Ok(("ops@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("ops@example.com", ""), Err("Please fill in all fields"));
}

#[test]
fn validate_login_input_rejects_bad_email() {
    assert_eq!(validate_login_input("ops", "secret"), Err("Please enter a valid email address"));
}

#[test]
fn password_is_not_trimmed() {
    assert_eq!(validate_login_input("a@b.co", " pw "), Ok(("a@b.co".to_owned(), " pw ".to_owned())));
}
