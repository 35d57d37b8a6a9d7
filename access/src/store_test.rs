use super::*;
use crate::profile::Role;

fn admin_profile() -> ProfileSnapshot {
    ProfileSnapshot { id: Some(1), email: "ops@example.com".to_owned(), name: Some("Ops".to_owned()), role: Role::Admin }
}

/// Storage whose reads and writes always fail.
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("SecurityError".to_owned()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================================
// load
// =============================================================================

#[test]
fn empty_storage_loads_anonymous() {
    let store = CredentialStore::new(MemoryStorage::new());
    let session = store.load();
    assert_eq!(session, StoredSession::default());
    assert_eq!(session.view(), SessionView::anonymous());
}

#[test]
fn save_then_load_returns_token_and_profile() {
    let store = CredentialStore::new(MemoryStorage::new());
    store.save("tok-1", &admin_profile(), false).unwrap();

    let session = store.load();
    assert_eq!(session.token.as_deref(), Some("tok-1"));
    assert_eq!(session.profile, Some(admin_profile()));
    assert!(session.view().is_admin());
    assert!(!store.remember_me());
}

#[test]
fn blank_token_counts_as_absent() {
    let store = CredentialStore::new(MemoryStorage::with_items([(TOKEN_KEY, "   ")]));
    assert!(store.token().is_none());
    assert!(!store.load().view().has_credential);
}

#[test]
fn malformed_profile_keeps_token_but_drops_role() {
    let store = CredentialStore::new(MemoryStorage::with_items([(TOKEN_KEY, "tok"), (PROFILE_KEY, "{oops")]));
    let view = store.load().view();
    assert!(view.has_credential);
    assert_eq!(view.role, None);
    assert!(!view.is_admin());
}

#[test]
fn legacy_profile_without_role_is_not_admin() {
    for raw in [r#"{"is_staff":true}"#, r#"{"email":"a@b.c","role":"superuser"}"#, "true"] {
        let store = CredentialStore::new(MemoryStorage::with_items([(TOKEN_KEY, "tok"), (PROFILE_KEY, raw)]));
        let view = store.load().view();
        assert!(view.has_credential, "{raw}");
        assert_eq!(view.role, None, "{raw}");
    }
}

#[test]
fn unreadable_storage_degrades_to_anonymous() {
    let store = CredentialStore::new(BrokenStorage);
    assert_eq!(store.load(), StoredSession::default());
    assert!(!store.remember_me());
}

// =============================================================================
// save / clear
// =============================================================================

#[test]
fn remember_me_is_recorded_and_reset() {
    let store = CredentialStore::new(MemoryStorage::new());
    store.save("tok", &admin_profile(), true).unwrap();
    assert!(store.remember_me());
    store.save("tok", &admin_profile(), false).unwrap();
    assert!(!store.remember_me());
}

#[test]
fn clear_removes_all_keys() {
    let store = CredentialStore::new(MemoryStorage::new());
    store.save("tok", &admin_profile(), true).unwrap();
    assert!(store.remember_me());

    store.clear().unwrap();
    assert_eq!(store.load(), StoredSession::default());
    assert!(!store.remember_me());
}

#[test]
fn write_failures_surface_errors() {
    let store = CredentialStore::new(BrokenStorage);
    assert!(matches!(store.save("tok", &admin_profile(), false), Err(StorageError::Unavailable)));
    assert!(matches!(store.clear(), Err(StorageError::Unavailable)));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Access("denied".to_owned()).to_string(), "storage access failed: denied");
}
