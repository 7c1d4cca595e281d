//! Lookup client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`FourByteClient`](crate::FourByteClient) and the
/// freshness cache wrapped around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// 4byte.directory base URL (or a compatible mirror)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum result pages to follow per lookup (the API pages at 100 entries)
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    /// How long a successful result stays fresh; 0 disables caching
    #[serde(default = "default_revalidate_secs")]
    pub revalidate_secs: u64,
}

fn default_base_url() -> String {
    "https://www.4byte.directory".into()
}
fn default_timeout_secs() -> u64 { 15 }
fn default_user_agent() -> String {
    concat!("chainselector/", env!("CARGO_PKG_VERSION")).into()
}
fn default_max_pages() -> usize { 1 }
fn default_revalidate_secs() -> u64 { 86_400 }

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_pages: default_max_pages(),
            revalidate_secs: default_revalidate_secs(),
        }
    }
}

impl LookupConfig {
    /// Point the client at a different base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}
