use super::*;
use crate::util::storage::MemoryStore;

fn sam() -> AuthUser {
    AuthUser {
        id: "1".to_owned(),
        name: "Sam".to_owned(),
        email: "s@x.com".to_owned(),
        role: None,
    }
}

#[test]
fn validate_profile_name_trims_and_requires_value() {
    assert_eq!(validate_profile_name("  Samuel  "), Ok("Samuel".to_owned()));
    assert_eq!(validate_profile_name("   "), Err("Enter a display name."));
}

#[test]
fn renamed_profile_changes_only_the_name() {
    let updated = renamed_profile(&sam(), "Samuel");
    assert_eq!(updated.name, "Samuel");
    assert_eq!(updated.id, "1");
    assert_eq!(updated.email, "s@x.com");
    assert_eq!(updated.role, None);
}

#[test]
fn save_profile_persists_the_user_blob() {
    let store = MemoryStore::new();
    assert!(save_profile(&store, &renamed_profile(&sam(), "Samuel")));

    let raw = store.get(USER_KEY).expect("profile should be stored");
    let persisted: AuthUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.name, "Samuel");
}
