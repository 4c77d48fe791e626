//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API token environment variable is not set
    ///
    /// Fatal at startup, before any document is processed.
    #[error("INKSYNC_API_TOKEN is not set in the environment")]
    MissingToken,

    /// Remote API error
    #[error("API error: {0}")]
    Api(#[from] inksync_domain::ApiError),

    /// Mapping blob error
    #[error(transparent)]
    Blob(#[from] inksync_domain::BlobError),

    /// Mapping store error
    #[error(transparent)]
    Store(#[from] inksync_store::StoreError),

    /// Publisher error (store-level failures during a run)
    #[error(transparent)]
    Publish(#[from] inksync_publisher::PublishError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
