//! # Process-wide site configuration
//!
//! The configuration is a lazy singleton backed by a [`tokio::sync::OnceCell`].
//! The first call to [`get_settings`] loads `.env` (via `dotenvy`), reads the
//! path from `SITE_CONFIG` (default `site.toml`), parses it and caches the
//! result for every later caller.

use std::path::PathBuf;

use store::{SiteConfig, StoreError};
use tokio::sync::OnceCell;

static SETTINGS: OnceCell<SiteConfig> = OnceCell::const_new();

/// Get or initialize the site configuration.
pub async fn get_settings() -> Result<&'static SiteConfig, StoreError> {
    SETTINGS
        .get_or_try_init(|| async {
            dotenvy::dotenv().ok();

            let path = std::env::var("SITE_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(SiteConfig::filename()));

            let config = SiteConfig::load(&path)?;
            tracing::info!(
                "Loaded site config from {} ({} accounts, {} sitemap items)",
                path.display(),
                config.accounts.len(),
                config.sitemap.items.len()
            );
            Ok(config)
        })
        .await
}
