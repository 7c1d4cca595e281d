//! The `SignatureLookup` trait — the seam between selectors and signature databases.

use std::sync::Arc;

use async_trait::async_trait;
use chainselector_core::Selector;

use crate::error::LookupError;

/// A source of human-readable signatures for a selector.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so they can be shared across Tokio
/// tasks as `Arc<dyn SignatureLookup>`.
#[async_trait]
pub trait SignatureLookup: Send + Sync {
    /// Resolve a selector to every known signature text.
    ///
    /// An empty list means the selector is unknown. Failures to reach or read
    /// the database are reported as `Err`, never as an empty list.
    async fn lookup(&self, selector: Selector) -> Result<Vec<String>, LookupError>;

    /// Short identifier for logs and error messages.
    fn name(&self) -> &str;

    /// Validate user-supplied hex, then resolve it.
    async fn lookup_hex(&self, raw: &str) -> Result<Vec<String>, LookupError> {
        let selector: Selector = raw.parse()?;
        self.lookup(selector).await
    }
}

#[async_trait]
impl<T: SignatureLookup + ?Sized> SignatureLookup for Arc<T> {
    async fn lookup(&self, selector: Selector) -> Result<Vec<String>, LookupError> {
        (**self).lookup(selector).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
