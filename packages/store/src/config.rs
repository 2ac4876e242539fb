//! # Site configuration: `site.toml`
//!
//! The server reads this file at startup (path from the `SITE_CONFIG`
//! environment variable, default [`SiteConfig::filename`]). It carries the
//! public base URL used by the sitemap, UI timing knobs, the sitemap's
//! content items and the account directory used by password login.
//!
//! ## Structure
//!
//! ```toml
//! [site]
//! name = "Campus"
//! base_url = "https://campus.example"
//!
//! [shell]
//! transition_delay_ms = 100
//!
//! [reveal]
//! threshold = 0.1
//!
//! [sitemap]
//! item_prefix = "/programs"
//! items = [{ slug = "study-skills", updated = "2024-05-01" }]
//!
//! [[accounts]]
//! id = "stu-1"
//! email = "student@campus.example"
//! name = "Sam Student"
//! account_type = "student"
//! password_hash = "$argon2id$v=19$..."
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::AccountType;

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub sitemap: SitemapConfig,
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
}

/// Public identity of the site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Absolute origin, without a trailing slash, e.g. `https://campus.example`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_site_name() -> String {
    "Campus".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

/// Dashboard shell timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Delay before the page transition wrapper shows its content.
    #[serde(default = "default_transition_delay")]
    pub transition_delay_ms: u64,
}

fn default_transition_delay() -> u64 {
    100
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: default_transition_delay(),
        }
    }
}

/// Scroll reveal tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible fraction (0.0..=1.0) at which a marked element is revealed.
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
}

fn default_reveal_threshold() -> f64 {
    0.1
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
        }
    }
}

/// Content items listed in the sitemap in addition to the static pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Path prefix under which content items are served.
    #[serde(default = "default_item_prefix")]
    pub item_prefix: String,
    #[serde(default)]
    pub items: Vec<SitemapItem>,
}

fn default_item_prefix() -> String {
    "/programs".to_string()
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            item_prefix: default_item_prefix(),
            items: Vec::new(),
        }
    }
}

/// A single content item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SitemapItem {
    pub slug: String,
    /// Last modification date as `YYYY-MM-DD`. Absent means "generation date".
    #[serde(default)]
    pub updated: Option<String>,
}

/// An account that can sign in with email and password.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub account_type: AccountType,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        let mut config: SiteConfig = toml::from_str(s)?;
        config.normalise();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a file. A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("{} not found, using default site config", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(StoreError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Find an account by email, ignoring case and surrounding whitespace.
    pub fn account_by_email(&self, email: &str) -> Option<&AccountEntry> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
    }

    fn normalise(&mut self) {
        while self.site.base_url.ends_with('/') {
            self.site.base_url.pop();
        }
        if !self.sitemap.item_prefix.starts_with('/') {
            self.sitemap.item_prefix.insert(0, '/');
        }
        while self.sitemap.item_prefix.len() > 1 && self.sitemap.item_prefix.ends_with('/') {
            self.sitemap.item_prefix.pop();
        }
        self.reveal.threshold = if self.reveal.threshold.is_finite() {
            self.reveal.threshold.clamp(0.0, 1.0)
        } else {
            tracing::warn!("Ignoring non-finite reveal threshold {}", self.reveal.threshold);
            default_reveal_threshold()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.shell.transition_delay_ms, 100);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.sitemap.item_prefix, "/programs");
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_full_file() {
        let config = SiteConfig::from_toml(
            r#"
            [site]
            name = "Campus"
            base_url = "https://campus.example/"

            [shell]
            transition_delay_ms = 250

            [reveal]
            threshold = 0.25

            [sitemap]
            item_prefix = "courses/"
            items = [
                { slug = "study-skills", updated = "2024-05-01" },
                { slug = "time-management" },
            ]

            [[accounts]]
            id = "org-1"
            email = "Admin@Campus.example"
            account_type = "organization"
            password_hash = "$argon2id$stub"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.base_url, "https://campus.example");
        assert_eq!(config.shell.transition_delay_ms, 250);
        assert_eq!(config.reveal.threshold, 0.25);
        assert_eq!(config.sitemap.item_prefix, "/courses");
        assert_eq!(config.sitemap.items.len(), 2);
        assert_eq!(config.sitemap.items[1].updated, None);

        let account = config.account_by_email(" admin@campus.example ").unwrap();
        assert_eq!(account.account_type, AccountType::Organization);
        assert!(account.name.is_none());
        assert!(config.account_by_email("nobody@campus.example").is_none());
    }

    #[test]
    fn test_threshold_is_clamped() {
        let config = SiteConfig::from_toml("[reveal]\nthreshold = 3.0").unwrap();
        assert_eq!(config.reveal.threshold, 1.0);
    }

    #[test]
    fn test_non_finite_threshold_falls_back_to_default() {
        for raw in ["nan", "+inf", "-inf"] {
            let config = SiteConfig::from_toml(&format!("[reveal]\nthreshold = {raw}")).unwrap();
            assert_eq!(config.reveal.threshold, 0.1, "{raw} should fall back");
        }
    }

    #[test]
    fn test_invalid_account_type_is_rejected() {
        let err = SiteConfig::from_toml(
            r#"
            [[accounts]]
            id = "x"
            email = "x@y"
            account_type = "parent"
            password_hash = "h"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_toml_roundtrip_keeps_sections() {
        let config = SiteConfig::default();
        let parsed = SiteConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join(format!("campus_missing_{}.toml", std::process::id()));
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
