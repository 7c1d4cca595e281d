//! In-memory signature database.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chainselector_core::{decode_signature, Selector, EXAMPLE_SIGNATURES};

use crate::error::LookupError;
use crate::lookup::SignatureLookup;

/// A signature database backed by a `HashMap`, keyed by derived selector.
///
/// Signatures are stored in canonical form. Colliding signatures are kept in
/// registration order.
pub struct MemorySignatureLookup {
    by_selector: RwLock<HashMap<Selector, Vec<String>>>,
}

impl MemorySignatureLookup {
    /// Create an empty database.
    pub fn new() -> Self {
        Self {
            by_selector: RwLock::new(HashMap::new()),
        }
    }

    /// Create a database pre-loaded with the example signatures.
    pub fn with_examples() -> Self {
        let db = Self::new();
        for sig in EXAMPLE_SIGNATURES {
            db.register(sig);
        }
        db
    }

    /// Register a signature, returning its selector.
    ///
    /// Returns `None` for blank input. Registering the same canonical
    /// signature twice is a no-op.
    pub fn register(&self, signature: &str) -> Option<Selector> {
        let decoded = decode_signature(signature)?;
        let mut map = self.by_selector.write().unwrap();
        let entry = map.entry(decoded.selector).or_default();
        if !entry.contains(&decoded.canonical) {
            entry.push(decoded.canonical);
        }
        Some(decoded.selector)
    }

    /// Load signatures from a JSON array of strings.
    /// Expected format: `["transfer(address,uint256)", ...]`
    pub fn load_json(&self, json: &str) -> Result<usize, serde_json::Error> {
        let sigs: Vec<String> = serde_json::from_str(json)?;
        Ok(sigs.iter().filter_map(|s| self.register(s)).count())
    }

    /// Total number of registered signatures.
    pub fn len(&self) -> usize {
        self.by_selector.read().unwrap().values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemorySignatureLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignatureLookup for MemorySignatureLookup {
    async fn lookup(&self, selector: Selector) -> Result<Vec<String>, LookupError> {
        Ok(self
            .by_selector
            .read()
            .unwrap()
            .get(&selector)
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
