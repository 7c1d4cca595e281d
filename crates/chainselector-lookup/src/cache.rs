//! Freshness-window cache for signature lookups.
//!
//! A successful result is reused until `window` has elapsed since it was
//! fetched, after which the next call goes back to the source. Failures are
//! never cached, so an outage does not pin an error for the whole window.
//!
//! Expired entries are swept whenever an insert finds the map holding at
//! least [`PRUNE_THRESHOLD`] entries, so memory tracks the number of
//! selectors seen within one window rather than over the process lifetime.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chainselector_core::Selector;

use crate::error::LookupError;
use crate::lookup::SignatureLookup;

/// Map size at which an insert first sweeps out expired entries.
pub const PRUNE_THRESHOLD: usize = 1024;

struct CacheEntry {
    fetched_at: Instant,
    signatures: Vec<String>,
}

/// Wraps a [`SignatureLookup`] with a per-selector freshness window.
pub struct CachedLookup<L> {
    inner: L,
    window: Duration,
    entries: RwLock<HashMap<Selector, CacheEntry>>,
}

impl<L: SignatureLookup> CachedLookup<L> {
    /// A zero `window` disables caching entirely.
    pub fn new(inner: L, window: Duration) -> Self {
        Self {
            inner,
            window,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of entries currently held, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the entry for one selector.
    pub fn invalidate(&self, selector: Selector) {
        self.entries.write().unwrap().remove(&selector);
    }

    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Remove every entry older than the window. Returns how many were dropped.
    pub fn prune_expired(&self) -> usize {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|_, e| e.fetched_at.elapsed() < self.window);
        before - entries.len()
    }

    fn fresh(&self, selector: Selector) -> Option<Vec<String>> {
        let entries = self.entries.read().unwrap();
        let entry = entries.get(&selector)?;
        (entry.fetched_at.elapsed() < self.window).then(|| entry.signatures.clone())
    }
}

#[async_trait]
impl<L: SignatureLookup> SignatureLookup for CachedLookup<L> {
    async fn lookup(&self, selector: Selector) -> Result<Vec<String>, LookupError> {
        if self.window.is_zero() {
            return self.inner.lookup(selector).await;
        }

        if let Some(signatures) = self.fresh(selector) {
            tracing::debug!(selector = %selector, count = signatures.len(), "cache hit");
            return Ok(signatures);
        }

        let signatures = self.inner.lookup(selector).await?;
        {
            let mut entries = self.entries.write().unwrap();
            if entries.len() >= PRUNE_THRESHOLD {
                let before = entries.len();
                entries.retain(|_, e| e.fetched_at.elapsed() < self.window);
                tracing::debug!(dropped = before - entries.len(), "pruned expired cache entries");
            }
            entries.insert(
                selector,
                CacheEntry {
                    fetched_at: Instant::now(),
                    signatures: signatures.clone(),
                },
            );
        }
        Ok(signatures)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
