use super::*;
use crate::util::storage::MemoryStore;

fn user(role: Option<&str>) -> AuthUser {
    AuthUser {
        id: "1".to_owned(),
        name: "Sam".to_owned(),
        email: "s@x.com".to_owned(),
        role: role.map(str::to_owned),
    }
}

#[test]
fn validate_signin_input_trims_and_requires_email_shape() {
    assert_eq!(
        validate_signin_input("  user@example.com  ", "pw"),
        Ok(("user@example.com".to_owned(), "pw".to_owned()))
    );
    assert_eq!(validate_signin_input("   ", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_signin_input("not-an-email", "pw"), Err("Enter a valid email address."));
}

#[test]
fn validate_signin_input_requires_password() {
    assert_eq!(validate_signin_input("a@b.com", ""), Err("Enter your password."));
}

#[test]
fn store_signin_writes_general_namespace_only() {
    let store = MemoryStore::new();
    store_signin(&store, "abc", Some(&user(None)));

    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
    let raw = store.get(USER_KEY).expect("profile should be persisted");
    let persisted: AuthUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.name, "Sam");

    assert_eq!(store.get("adminToken"), None);
    assert_eq!(store.get("adminUser"), None);
}

#[test]
fn store_signin_without_profile_writes_token_only() {
    let store = MemoryStore::new();
    store_signin(&store, "abc", None);
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn admins_land_on_the_admin_root() {
    let admin = user(Some("admin"));
    assert_eq!(post_signin_destination(Some(&admin), None), "/admin");
    // Admin wins over a preserved redirect.
    assert_eq!(post_signin_destination(Some(&admin), Some("/account")), "/admin");
}

#[test]
fn preserved_redirect_is_honored_for_regular_users() {
    let shopper = user(Some("user"));
    assert_eq!(post_signin_destination(Some(&shopper), Some("/account")), "/account");
}

#[test]
fn unsafe_or_missing_redirects_fall_back_home() {
    let shopper = user(None);
    assert_eq!(post_signin_destination(Some(&shopper), None), "/");
    assert_eq!(post_signin_destination(Some(&shopper), Some("https://evil.example")), "/");
    assert_eq!(post_signin_destination(Some(&shopper), Some("//evil.example")), "/");
    assert_eq!(post_signin_destination(None, None), "/");
}
