//! chainselector-lookup — reverse lookup of 4-byte selectors.
//!
//! # Overview
//!
//! Selectors are one-way hashes, so mapping one back to a human-readable
//! signature needs a database. This crate defines:
//!
//! - [`SignatureLookup`] — the async trait every signature source implements
//! - [`FourByteClient`] — HTTP client for the public 4byte.directory API
//! - [`MemorySignatureLookup`] — in-memory database (offline use, tests)
//! - [`CachedLookup`] — freshness-window cache around any source
//! - [`LookupError`] — failures, kept distinct from "no known signatures"
//!
//! # Usage
//! ```rust,no_run
//! # async fn run() -> Result<(), chainselector_lookup::LookupError> {
//! use chainselector_lookup::{FourByteClient, LookupConfig, SignatureLookup};
//!
//! let client = FourByteClient::new(LookupConfig::default())?;
//! let signatures = client.lookup_hex("0xa9059cbb").await?;
//! println!("{signatures:?}");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fourbyte;
pub mod lookup;
pub mod memory;

pub use cache::CachedLookup;
pub use config::LookupConfig;
pub use error::LookupError;
pub use fourbyte::FourByteClient;
pub use lookup::SignatureLookup;
pub use memory::MemorySignatureLookup;
