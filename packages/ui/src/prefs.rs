//! Platform preference store.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStore`]
//! - **Native**: one file per key under `<data_dir>/campus/` via [`store::FileStore`]

/// Create the platform-appropriate preference store.
pub fn preference_store() -> impl store::KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("campus");
        store::FileStore::new(base)
    }
}
