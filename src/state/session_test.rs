use super::*;
use crate::util::storage::MemoryStore;

fn store_with(pairs: &[(&str, &str)]) -> MemoryStore {
    let store = MemoryStore::new();
    for (key, value) in pairs {
        store.set(key, value);
    }
    store
}

#[test]
fn general_scope_without_token_is_anonymous() {
    let store = MemoryStore::new();
    assert_eq!(read_session(&store, Scope::General), SessionState::Anonymous);
}

#[test]
fn empty_token_counts_as_absent() {
    let store = store_with(&[(TOKEN_KEY, ""), (USER_KEY, r#"{"id":"1"}"#)]);
    assert_eq!(read_session(&store, Scope::General), SessionState::Anonymous);
}

#[test]
fn general_scope_reads_token_and_profile() {
    let store = store_with(&[
        (TOKEN_KEY, "abc"),
        (USER_KEY, r#"{"id":"1","name":"Sam","email":"s@x.com"}"#),
    ]);
    let SessionState::Active(snapshot) = read_session(&store, Scope::General) else {
        panic!("expected an active session");
    };
    assert!(snapshot.authenticated);
    assert_eq!(snapshot.role, Some(Role::User));
    assert_eq!(snapshot.display_name(), "Sam");
}

#[test]
fn general_scope_tolerates_corrupt_profile() {
    let store = store_with(&[(TOKEN_KEY, "abc"), (USER_KEY, "{not json")]);
    let SessionState::Active(snapshot) = read_session(&store, Scope::General) else {
        panic!("expected an active session");
    };
    assert!(snapshot.authenticated);
    assert_eq!(snapshot.profile, None);
    assert_eq!(snapshot.role, None);
    assert_eq!(snapshot.display_name(), "Account");
}

#[test]
fn general_scope_tolerates_missing_profile() {
    let store = store_with(&[(TOKEN_KEY, "abc")]);
    let SessionState::Active(snapshot) = read_session(&store, Scope::General) else {
        panic!("expected an active session");
    };
    assert!(snapshot.authenticated);
    assert_eq!(snapshot.profile, None);
}

#[test]
fn general_scope_ignores_admin_namespace() {
    let store = store_with(&[(ADMIN_TOKEN_KEY, "t"), (ADMIN_USER_KEY, r#"{"id":"2"}"#)]);
    assert_eq!(read_session(&store, Scope::General), SessionState::Anonymous);
}

#[test]
fn admin_scope_prefers_admin_namespace() {
    let store = store_with(&[
        (TOKEN_KEY, "abc"),
        (USER_KEY, r#"{"id":"1","name":"Sam","email":"s@x.com","role":"admin"}"#),
        (ADMIN_TOKEN_KEY, "t"),
        (ADMIN_USER_KEY, r#"{"id":"2","name":"Root","email":"r@x.com","role":"admin"}"#),
    ]);
    let SessionState::Active(snapshot) = read_session(&store, Scope::Admin) else {
        panic!("expected an active session");
    };
    assert_eq!(snapshot.profile.unwrap().id, "2");
}

#[test]
fn admin_scope_falls_back_to_general_namespace() {
    let store = store_with(&[
        (TOKEN_KEY, "abc"),
        (USER_KEY, r#"{"id":"1","name":"Sam","email":"s@x.com","role":"admin"}"#),
    ]);
    let SessionState::Active(snapshot) = read_session(&store, Scope::Admin) else {
        panic!("expected an active session");
    };
    assert!(snapshot.is_admin());
}

#[test]
fn admin_scope_treats_missing_role_as_non_admin() {
    // Resolution of the legacy inconsistency: a token in the admin namespace
    // does not default the role to admin; the explicit field is authoritative.
    let store = store_with(&[(ADMIN_TOKEN_KEY, "t"), (ADMIN_USER_KEY, r#"{"id":"2"}"#)]);
    let SessionState::Active(snapshot) = read_session(&store, Scope::Admin) else {
        panic!("expected an active session");
    };
    assert_eq!(snapshot.role, Some(Role::User));
    assert!(!snapshot.is_admin());
}

#[test]
fn admin_scope_flags_corrupt_profile() {
    let store = store_with(&[(ADMIN_TOKEN_KEY, "t"), (ADMIN_USER_KEY, "{oops")]);
    assert_eq!(read_session(&store, Scope::Admin), SessionState::Corrupt);
}

#[test]
fn admin_scope_flags_missing_profile() {
    let store = store_with(&[(ADMIN_TOKEN_KEY, "t")]);
    assert_eq!(read_session(&store, Scope::Admin), SessionState::Corrupt);
}

#[test]
fn corrupt_state_renders_as_anonymous() {
    assert_eq!(SessionState::Corrupt.snapshot(), SessionSnapshot::anonymous());
}

#[test]
fn profile_update_applies_to_authenticated_snapshot() {
    let snapshot = SessionSnapshot {
        authenticated: true,
        role: Some(Role::User),
        profile: None,
    };
    let user = AuthUser {
        id: "1".to_owned(),
        name: "Sam Updated".to_owned(),
        email: "s@x.com".to_owned(),
        role: Some("admin".to_owned()),
    };
    let next = snapshot.with_profile_update(&user);
    assert_eq!(next.display_name(), "Sam Updated");
    assert_eq!(next.role, Some(Role::Admin));
}

#[test]
fn profile_update_is_ignored_when_logged_out() {
    let user = AuthUser {
        id: "1".to_owned(),
        name: "Sam".to_owned(),
        email: "s@x.com".to_owned(),
        role: None,
    };
    let next = SessionSnapshot::anonymous().with_profile_update(&user);
    assert_eq!(next, SessionSnapshot::anonymous());
}

#[test]
fn surface_rederives_after_external_token_removal() {
    // Scenario: a navbar shows "Sam"; a second tab removes the token.
    use crate::util::events::SessionEvent;

    let store = store_with(&[
        (TOKEN_KEY, "abc"),
        (USER_KEY, r#"{"id":"1","name":"Sam","email":"s@x.com"}"#),
    ]);
    let mounted = read_session(&store, Scope::General).snapshot();
    assert_eq!(mounted.display_name(), "Sam");

    store.remove(TOKEN_KEY);
    let event = SessionEvent::ExternalChange { key: TOKEN_KEY.to_owned() };
    let after = snapshot_after_event(&store, Scope::General, &mounted, &event);
    assert!(!after.authenticated, "navbar should fall back to the sign-in affordance");
}

#[test]
fn surface_applies_profile_update_without_store_read() {
    use crate::util::events::SessionEvent;

    // The store still holds the old name; the event payload wins.
    let store = store_with(&[
        (TOKEN_KEY, "abc"),
        (USER_KEY, r#"{"id":"1","name":"Sam","email":"s@x.com"}"#),
    ]);
    let mounted = read_session(&store, Scope::General).snapshot();
    let user = AuthUser {
        id: "1".to_owned(),
        name: "Samuel".to_owned(),
        email: "s@x.com".to_owned(),
        role: None,
    };
    let event = SessionEvent::ProfileUpdated { user };
    let after = snapshot_after_event(&store, Scope::General, &mounted, &event);
    assert_eq!(after.display_name(), "Samuel");
}

#[test]
fn display_name_falls_back_to_email() {
    let snapshot = SessionSnapshot {
        authenticated: true,
        role: Some(Role::User),
        profile: Some(AuthUser {
            id: "1".to_owned(),
            name: String::new(),
            email: "s@x.com".to_owned(),
            role: None,
        }),
    };
    assert_eq!(snapshot.display_name(), "s@x.com");
}
