//! Server error types.

use chainselector_lookup::LookupError;
use thiserror::Error;

/// Errors raised while configuring or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: String, value: String },

    #[error("Lookup client error: {0}")]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
