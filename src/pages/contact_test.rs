use super::*;

#[test]
fn validate_contact_input_accepts_trimmed_values() {
    assert_eq!(
        validate_contact_input(" Sam ", " s@x.com ", " Hello there "),
        Ok(("Sam".to_owned(), "s@x.com".to_owned(), "Hello there".to_owned()))
    );
}

#[test]
fn validate_contact_input_requires_every_field() {
    assert_eq!(validate_contact_input("", "s@x.com", "Hi"), Err("Enter your name."));
    assert_eq!(validate_contact_input("Sam", "nope", "Hi"), Err("Enter a valid email address."));
    assert_eq!(validate_contact_input("Sam", "s@x.com", "   "), Err("Enter a message."));
}
