pub mod config;
pub mod error;
pub mod models;
pub mod prefs;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::SiteConfig;
pub use error::StoreError;
pub use models::AccountType;
pub use prefs::{KeyValueStore, SidebarPreference};
