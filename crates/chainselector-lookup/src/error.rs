//! Lookup error types.

use chainselector_core::InvalidSelector;
use thiserror::Error;

/// Errors that can occur while resolving a selector.
///
/// An unknown selector is NOT an error: it resolves to an empty list.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The supplied key is not a 4-byte selector.
    #[error(transparent)]
    InvalidSelector(#[from] InvalidSelector),

    /// The signature database answered with a non-success status.
    #[error("{service} returned HTTP {status}")]
    Unavailable { service: String, status: u16 },

    /// The signature database asked us to back off.
    #[error("Rate limited by {service}")]
    RateLimited { service: String },

    /// The request never produced a response (connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// A response arrived but its body could not be decoded.
    #[error("Invalid response from {service}: {reason}")]
    InvalidResponse { service: String, reason: String },
}

impl LookupError {
    /// Returns `true` if the caller supplied bad input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidSelector(_))
    }

    /// Returns `true` if the database responded but refused to serve the request.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::RateLimited { .. })
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}
