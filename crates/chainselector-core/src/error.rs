//! Error types for selector parsing.

use thiserror::Error;

/// Returned when a string is not a valid 4-byte selector.
///
/// Only the [`FromStr`](std::str::FromStr) path produces this; the plain
/// validator [`normalize_hex_selector`](crate::normalize_hex_selector)
/// signals invalid input with `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid selector {input:?}: expected 4 bytes (8 hex chars), e.g. 0xa9059cbb")]
pub struct InvalidSelector {
    /// The rejected input, as supplied.
    pub input: String,
}

impl InvalidSelector {
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}
