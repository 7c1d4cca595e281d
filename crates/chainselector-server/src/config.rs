//! Server configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, an optional JSON
//! file, `CHAINSELECTOR_*` environment variables, then CLI flags.

use serde::{Deserialize, Serialize};
use std::path::Path;

use chainselector_lookup::LookupConfig;

use crate::error::ServerError;
use crate::tracing_setup::LogConfig;

pub const ENV_BIND: &str = "CHAINSELECTOR_BIND";
pub const ENV_FOURBYTE_URL: &str = "CHAINSELECTOR_FOURBYTE_URL";
pub const ENV_REVALIDATE_SECS: &str = "CHAINSELECTOR_REVALIDATE_SECS";
pub const ENV_LOG: &str = "CHAINSELECTOR_LOG";
pub const ENV_LOG_JSON: &str = "CHAINSELECTOR_LOG_JSON";

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address, e.g. "127.0.0.1:8080"
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Serve reverse lookups from the bundled example signatures only
    #[serde(default)]
    pub offline: bool,
    /// Allow cross-origin requests from any origin
    #[serde(default)]
    pub cors: bool,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

fn default_bind() -> String {
    "127.0.0.1:8080".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            offline: false,
            cors: false,
            log: LogConfig::default(),
            lookup: LookupConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ServerError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ServerError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply `CHAINSELECTOR_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ServerError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn apply_env_from<F>(mut self, var: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = var(ENV_BIND) {
            self.bind = bind;
        }
        if let Some(url) = var(ENV_FOURBYTE_URL) {
            self.lookup.base_url = url;
        }
        if let Some(secs) = var(ENV_REVALIDATE_SECS) {
            self.lookup.revalidate_secs = secs.trim().parse().map_err(|_| ServerError::InvalidEnv {
                key: ENV_REVALIDATE_SECS.into(),
                value: secs.clone(),
            })?;
        }
        if let Some(level) = var(ENV_LOG) {
            self.log.level = level;
        }
        if let Some(json) = var(ENV_LOG_JSON) {
            self.log.json = parse_bool(&json).ok_or_else(|| ServerError::InvalidEnv {
                key: ENV_LOG_JSON.into(),
                value: json.clone(),
            })?;
        }
        Ok(self)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
