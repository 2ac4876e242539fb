//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the web platform. Every
//! call looks up `window.localStorage` afresh; when storage is unavailable
//! (private mode, disabled cookies) reads return `None` and writes return an
//! error, which the UI treats as "use the default".

use crate::error::StoreError;
use crate::prefs::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or_else(|| StoreError::Write {
            key: key.to_string(),
            reason: "localStorage unavailable".to_string(),
        })?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}
