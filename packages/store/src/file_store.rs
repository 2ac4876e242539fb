//! # Filesystem-backed preference store
//!
//! [`FileStore`] keeps one file per key under a base directory, holding the
//! raw string value. Used on native targets so preferences survive restarts.
//!
//! ```text
//! <base_dir>/
//! └── dashboard.sidebar.collapsed    # "true" / "false"
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `campus` as the
//! base in applications.

use std::path::PathBuf;

use crate::error::StoreError;
use crate::prefs::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; strip separators so a key can never escape the base dir
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(write_err)?;
        std::fs::write(self.key_path(key), value).map_err(write_err)
    }
}
