//! Single accessor for the session credential and profile snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the bearer token and the profile snapshot in
//! `localStorage`. Every guard and API call goes through [`CredentialStore`]
//! so parsing and validation happen in one place.
//!
//! ERROR HANDLING
//! ==============
//! [`CredentialStore::load`] never fails: unreadable storage or a malformed
//! snapshot degrade to "absent", which the policy treats as unauthenticated
//! or non-admin. Writes surface [`StorageError`] to the caller.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::policy::SessionView;
use crate::profile::ProfileSnapshot;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the serialized [`ProfileSnapshot`].
pub const PROFILE_KEY: &str = "userData";
/// Storage key recording the "remember me" choice.
pub const REMEMBER_KEY: &str = "rememberMe";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (SSR, disabled storage, private mode).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation.
    #[error("storage access failed: {0}")]
    Access(String),
    /// The profile snapshot could not be serialized.
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key/value storage, shaped after the Web Storage API.
pub trait KeyValueStorage {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value; removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with raw entries.
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let items = items.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { items: RefCell::new(items) }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Credential and profile as read back from storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub profile: Option<ProfileSnapshot>,
}

impl StoredSession {
    /// Reduce to the inputs the authorization policy needs.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView { has_credential: self.token.is_some(), role: self.profile.as_ref().map(|p| p.role) }
    }
}

/// Typed get/set/clear over a [`KeyValueStorage`].
#[derive(Debug)]
pub struct CredentialStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the token and profile. Never fails; see module docs.
    pub fn load(&self) -> StoredSession {
        let token = self
            .storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());
        let profile = self
            .storage
            .get_item(PROFILE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<ProfileSnapshot>(&raw).ok());
        StoredSession { token, profile }
    }

    /// Bearer token, if one is stored.
    pub fn token(&self) -> Option<String> {
        self.load().token
    }

    /// Whether the user asked to be remembered at login.
    pub fn remember_me(&self) -> bool {
        matches!(self.storage.get_item(REMEMBER_KEY), Ok(Some(v)) if v == "true")
    }

    /// Persist a fresh login.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or any write fails.
    pub fn save(&self, token: &str, profile: &ProfileSnapshot, remember_me: bool) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile)?;
        self.storage.set_item(TOKEN_KEY, token)?;
        self.storage.set_item(PROFILE_KEY, &raw)?;
        if remember_me {
            self.storage.set_item(REMEMBER_KEY, "true")?;
        } else {
            self.storage.remove_item(REMEMBER_KEY)?;
        }
        Ok(())
    }

    /// Remove every stored credential key.
    ///
    /// All keys are attempted even if one removal fails; the first error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] hit while removing keys.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in [TOKEN_KEY, PROFILE_KEY, REMEMBER_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
