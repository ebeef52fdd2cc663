use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get(TOKEN_KEY), None);

    store.set(TOKEN_KEY, "abc");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));

    store.set(TOKEN_KEY, "def");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("def"));

    store.remove(TOKEN_KEY);
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn remove_is_idempotent() {
    let store = MemoryStore::new();
    store.remove(USER_KEY);
    store.set(USER_KEY, "{}");
    store.remove(USER_KEY);
    store.remove(USER_KEY);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn clear_credentials_removes_both_namespaces() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "t1");
    store.set(USER_KEY, "{\"id\":\"1\"}");
    store.set(ADMIN_TOKEN_KEY, "t2");
    store.set(ADMIN_USER_KEY, "{\"id\":\"2\"}");
    store.set("theme", "dark");

    clear_credentials(&store);

    for key in CREDENTIAL_KEYS {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
    // Unrelated keys are untouched.
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn key_names_are_the_persisted_contract() {
    assert_eq!(TOKEN_KEY, "token");
    assert_eq!(USER_KEY, "user");
    assert_eq!(ADMIN_TOKEN_KEY, "adminToken");
    assert_eq!(ADMIN_USER_KEY, "adminUser");
}
