//! Browser `localStorage` backend for the credential store.
//!
//! Reads go through [`access::CredentialStore`], so the route guard and the
//! API client agree on key names and snapshot parsing. Off the browser every
//! operation reports [`StorageError::Unavailable`], which the store treats as
//! "no credential".

use access::{CredentialStore, KeyValueStorage, StorageError};

/// `window.localStorage`, resolved per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Credential store over the browser's `localStorage`.
#[must_use]
pub fn browser_store() -> CredentialStore<BrowserStorage> {
    CredentialStore::new(BrowserStorage)
}
