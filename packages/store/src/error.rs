use thiserror::Error;

/// Errors raised by the preference stores and the configuration loader.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialise site config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
