use super::*;

#[test]
fn validate_signup_input_accepts_trimmed_values() {
    assert_eq!(
        validate_signup_input(" Sam ", " s@x.com ", "secret1"),
        Ok(("Sam".to_owned(), "s@x.com".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_signup_input_requires_name() {
    assert_eq!(validate_signup_input("  ", "s@x.com", "secret1"), Err("Enter your name."));
}

#[test]
fn validate_signup_input_requires_email_shape() {
    assert_eq!(
        validate_signup_input("Sam", "nope", "secret1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_signup_input_requires_password_length() {
    assert_eq!(
        validate_signup_input("Sam", "s@x.com", "short"),
        Err("Password must be at least 6 characters.")
    );
}
