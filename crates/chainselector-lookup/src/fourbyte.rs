//! 4byte.directory client.
//!
//! `GET {base}/api/v1/signatures/?hex_signature=0xa9059cbb` returns a page of
//! `{ next, results: [{ text_signature, hex_signature, .. }] }`. The
//! `text_signature` strings are returned as the database stores them and are
//! not re-normalized.

use async_trait::async_trait;
use chainselector_core::Selector;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::lookup::SignatureLookup;

const SERVICE: &str = "4byte.directory";

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FourBytePage {
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    results: Vec<FourByteResult>,
}

/// One row of the 4byte.directory signatures table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FourByteResult {
    pub text_signature: String,
    #[serde(default)]
    pub hex_signature: String,
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// HTTP client for the 4byte.directory signature database.
///
/// No retries: every call produces exactly one outcome, and dropping the
/// future cancels the request.
pub struct FourByteClient {
    http: Client,
    base_url: String,
    max_pages: usize,
}

impl FourByteClient {
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_pages: config.max_pages.max(1),
        })
    }

    /// Create with default configuration (public 4byte.directory, one page).
    pub fn default_client() -> Result<Self, LookupError> {
        Self::new(LookupConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw result rows for a selector, following `next` links up to
    /// the configured page limit.
    pub async fn lookup_results(
        &self,
        selector: Selector,
    ) -> Result<Vec<FourByteResult>, LookupError> {
        let url = format!("{}/api/v1/signatures/", self.base_url);
        tracing::debug!(selector = %selector, url = %url, "querying signature database");

        let request = self
            .http
            .get(&url)
            .query(&[("hex_signature", selector.to_hex())]);
        let mut page = self.fetch_page(request).await?;
        let mut results = std::mem::take(&mut page.results);
        let mut fetched = 1;

        while let Some(next) = page.next.take() {
            if fetched >= self.max_pages {
                tracing::debug!(
                    selector = %selector,
                    pages = fetched,
                    "page limit reached, ignoring remaining results"
                );
                break;
            }
            if !self.is_own_page(&next) {
                tracing::warn!(
                    selector = %selector,
                    next = %next,
                    "next page is outside the configured base URL, not following"
                );
                break;
            }
            page = self.fetch_page(self.http.get(&next)).await?;
            results.append(&mut page.results);
            fetched += 1;
        }

        tracing::debug!(selector = %selector, count = results.len(), "lookup complete");
        Ok(results)
    }

    /// A `next` link is only followed when it stays under `base_url`.
    fn is_own_page(&self, url: &str) -> bool {
        url.strip_prefix(self.base_url.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    async fn fetch_page(&self, request: RequestBuilder) -> Result<FourBytePage, LookupError> {
        let resp = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "signature database request failed");
            LookupError::Transport(e.to_string())
        })?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited {
                service: SERVICE.into(),
            });
        }
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "signature database returned an error status");
            return Err(LookupError::Unavailable {
                service: SERVICE.into(),
                status: status.as_u16(),
            });
        }

        resp.json::<FourBytePage>()
            .await
            .map_err(|e| LookupError::InvalidResponse {
                service: SERVICE.into(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl SignatureLookup for FourByteClient {
    async fn lookup(&self, selector: Selector) -> Result<Vec<String>, LookupError> {
        let results = self.lookup_results(selector).await?;
        Ok(results.into_iter().map(|r| r.text_signature).collect())
    }

    fn name(&self) -> &str {
        SERVICE
    }
}
