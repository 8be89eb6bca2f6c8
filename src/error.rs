//! Error types for the Aria gateway

use thiserror::Error;

/// Result type alias for Aria operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Aria gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing API key, bad config file)
    #[error("configuration error: {0}")]
    Config(String),

    /// Non-2xx response from an upstream provider, status preserved verbatim
    #[error("provider error {status}: {body}")]
    Provider { status: u16, body: String },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error (connection failure, timeout)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}
