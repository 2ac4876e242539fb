//! # Persisted UI preferences
//!
//! A tiny string key-value abstraction ([`KeyValueStore`]) with one typed
//! preference on top of it, [`SidebarPreference`], which remembers whether the
//! dashboard sidebar is collapsed.
//!
//! Backends live in sibling modules:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, server-side rendering |
//! | [`crate::FileStore`] | desktop / native (`<data_dir>/campus/<key>`) |
//! | `LocalStore` | browser `localStorage` (`web` feature, wasm only) |
//!
//! Reads never fail: an unavailable backend reads as "no value", which the
//! preference maps to its default. Writes report failures so callers can log
//! them.

use crate::error::StoreError;

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Collapsed/expanded state of the dashboard sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarPreference {
    pub collapsed: bool,
}

impl SidebarPreference {
    /// The fixed storage key.
    pub const KEY: &'static str = "dashboard.sidebar.collapsed";

    /// Interpret a stored value. Only the exact string `"true"` means
    /// collapsed; anything else, including absence, is expanded.
    pub fn parse(raw: Option<&str>) -> Self {
        Self {
            collapsed: raw == Some("true"),
        }
    }

    /// Load the preference from `store`.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self::parse(store.get(Self::KEY).as_deref())
    }

    /// Persist the preference to `store` as `"true"` / `"false"`.
    pub fn save(self, store: &impl KeyValueStore) -> Result<(), StoreError> {
        store.set(Self::KEY, if self.collapsed { "true" } else { "false" })
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        Self {
            collapsed: !self.collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_absent_key_is_expanded() {
        let store = MemoryStore::new();
        assert_eq!(SidebarPreference::load(&store), SidebarPreference { collapsed: false });
    }

    #[test]
    fn test_true_is_collapsed() {
        let store = MemoryStore::new();
        store.set(SidebarPreference::KEY, "true").unwrap();
        assert!(SidebarPreference::load(&store).collapsed);
    }

    #[test]
    fn test_malformed_values_are_expanded() {
        for raw in ["", "TRUE", "1", "yes", "{\"collapsed\":true}", "false", " true", "true\n"] {
            assert!(
                !SidebarPreference::parse(Some(raw)).collapsed,
                "{raw:?} should read as expanded"
            );
        }
    }

    #[test]
    fn test_toggle_survives_reload() {
        let store = MemoryStore::new();

        let pref = SidebarPreference::load(&store).toggled();
        pref.save(&store).unwrap();
        assert_eq!(store.get(SidebarPreference::KEY).as_deref(), Some("true"));

        // A fresh mount reads the same value back
        assert_eq!(SidebarPreference::load(&store), pref);

        let pref = pref.toggled();
        pref.save(&store).unwrap();
        assert_eq!(store.get(SidebarPreference::KEY).as_deref(), Some("false"));
        assert!(!SidebarPreference::load(&store).collapsed);
    }
}
