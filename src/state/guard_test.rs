use super::*;
use crate::util::storage::{
    ADMIN_TOKEN_KEY, ADMIN_USER_KEY, CREDENTIAL_KEYS, MemoryStore, USER_KEY,
};

fn store_with(pairs: &[(&str, &str)]) -> MemoryStore {
    let store = MemoryStore::new();
    for (key, value) in pairs {
        store.set(key, value);
    }
    store
}

#[test]
fn private_guard_redirects_without_token() {
    let store = MemoryStore::new();
    assert_eq!(
        evaluate_private(&store),
        GuardOutcome::RedirectSignin { preserve_location: true }
    );
}

#[test]
fn private_guard_allows_any_authenticated_user() {
    // No role check: a plain shopper token passes.
    let store = store_with(&[(TOKEN_KEY, "abc")]);
    assert_eq!(evaluate_private(&store), GuardOutcome::Allow);
}

#[test]
fn private_guard_never_mutates_the_store() {
    let store = store_with(&[(USER_KEY, "{corrupt")]);
    let _ = evaluate_private(&store);
    assert_eq!(store.get(USER_KEY).as_deref(), Some("{corrupt"));
}

#[test]
fn admin_guard_redirects_to_signin_without_any_token() {
    let store = MemoryStore::new();
    assert_eq!(
        evaluate_admin(&store),
        GuardOutcome::RedirectSignin { preserve_location: true }
    );
}

#[test]
fn admin_guard_allows_admin_role() {
    let store = store_with(&[
        (ADMIN_TOKEN_KEY, "t"),
        (ADMIN_USER_KEY, r#"{"id":"2","name":"Root","email":"r@x.com","role":"admin"}"#),
    ]);
    assert_eq!(evaluate_admin(&store), GuardOutcome::Allow);
}

#[test]
fn admin_guard_sends_non_admin_home_not_to_signin() {
    // Authenticated but unauthorized: re-prompting for sign-in would be wrong.
    let store = store_with(&[(ADMIN_TOKEN_KEY, "t"), (ADMIN_USER_KEY, r#"{"id":"2","role":"user"}"#)]);
    assert_eq!(evaluate_admin(&store), GuardOutcome::RedirectHome);
}

#[test]
fn admin_guard_flags_corrupt_profile_for_purge() {
    let store = store_with(&[(ADMIN_TOKEN_KEY, "t"), (ADMIN_USER_KEY, "{oops")]);
    assert_eq!(evaluate_admin(&store), GuardOutcome::PurgeAndRedirectSignin);
    // The pure evaluation itself does not touch the store.
    assert_eq!(store.get(ADMIN_TOKEN_KEY).as_deref(), Some("t"));
}

#[test]
fn enforce_admin_purges_all_keys_on_corruption() {
    let store = store_with(&[
        (TOKEN_KEY, "abc"),
        (USER_KEY, r#"{"id":"1"}"#),
        (ADMIN_TOKEN_KEY, "t"),
        (ADMIN_USER_KEY, "{oops"),
    ]);
    assert_eq!(enforce_admin(&store), GuardOutcome::PurgeAndRedirectSignin);
    for key in CREDENTIAL_KEYS {
        assert_eq!(store.get(key), None, "{key} should be purged");
    }
    // A subsequent evaluation sees a plain signed-out store.
    assert_eq!(
        evaluate_admin(&store),
        GuardOutcome::RedirectSignin { preserve_location: true }
    );
}

#[test]
fn enforce_admin_leaves_valid_sessions_untouched() {
    let store = store_with(&[
        (ADMIN_TOKEN_KEY, "t"),
        (ADMIN_USER_KEY, r#"{"id":"2","name":"Root","email":"r@x.com","role":"admin"}"#),
    ]);
    assert_eq!(enforce_admin(&store), GuardOutcome::Allow);
    assert_eq!(store.get(ADMIN_TOKEN_KEY).as_deref(), Some("t"));
}

#[test]
fn admin_guard_falls_back_to_general_namespace() {
    let store = store_with(&[
        (TOKEN_KEY, "abc"),
        (USER_KEY, r#"{"id":"1","name":"Sam","email":"s@x.com","role":"admin"}"#),
    ]);
    assert_eq!(evaluate_admin(&store), GuardOutcome::Allow);
}

#[test]
fn signin_redirect_target_preserves_real_locations() {
    assert_eq!(signin_redirect_target(true, "/account"), "/signin?redirect=/account");
    assert_eq!(signin_redirect_target(true, "/admin/products"), "/signin?redirect=/admin/products");
}

#[test]
fn signin_redirect_target_skips_trivial_locations() {
    assert_eq!(signin_redirect_target(false, "/account"), "/signin");
    assert_eq!(signin_redirect_target(true, "/"), "/signin");
    assert_eq!(signin_redirect_target(true, "/signin"), "/signin");
    assert_eq!(signin_redirect_target(true, ""), "/signin");
}
