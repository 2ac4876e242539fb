use serde::{Deserialize, Serialize};
use store::SiteConfig;

/// The part of the site configuration the browser needs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClientSettings {
    pub transition_delay_ms: u64,
    pub reveal_threshold: f64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

impl From<&SiteConfig> for ClientSettings {
    fn from(config: &SiteConfig) -> Self {
        Self {
            transition_delay_ms: config.shell.transition_delay_ms,
            reveal_threshold: config.reveal.threshold,
        }
    }
}
