use super::*;

#[test]
fn catalog_failed_message_formats_status() {
    assert_eq!(catalog_failed_message(502), "catalog request failed: 502");
}

#[test]
fn contact_failed_message_formats_status() {
    assert_eq!(contact_failed_message(429), "contact request failed: 429");
}

#[test]
fn auth_failed_message_formats_status() {
    assert_eq!(auth_failed_message(401), "request failed: 401");
}
