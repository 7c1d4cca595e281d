//! chainselector-core — signature ↔ selector conversion for EVM functions and errors.
//!
//! This crate defines:
//! - [`normalize_signature`] — canonical form of a human-written signature
//! - [`selector_to_hex`] / [`selector`] — the 4-byte keccak-256 selector
//! - [`normalize_hex_selector`] — validation of user-supplied selector hex
//! - [`Selector`] — the typed 4-byte selector
//!
//! Everything here is pure and synchronous; reverse lookup against a signature
//! database lives in `chainselector-lookup`.
//!
//! # Quick Start
//!
//! ```rust
//! use chainselector_core::{normalize_hex_selector, normalize_signature, selector_to_hex};
//!
//! assert_eq!(
//!     normalize_signature("transfer(address to, uint256 amount)"),
//!     "transfer(address,uint256)"
//! );
//! assert_eq!(selector_to_hex("transfer(address to, uint256 amount)"), "0xa9059cbb");
//! assert_eq!(normalize_hex_selector("A9059CBB").as_deref(), Some("0xa9059cbb"));
//! ```

pub mod error;
pub mod normalize;
pub mod selector;
pub mod types;
pub mod validate;

pub use error::InvalidSelector;
pub use normalize::normalize_signature;
pub use selector::{decode_signature, keccak256, selector, selector_to_hex, EXAMPLE_SIGNATURES};
pub use types::{DecodedSignature, Selector};
pub use validate::normalize_hex_selector;
