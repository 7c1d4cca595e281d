//! chainselector-server — HTTP API over the selector core and reverse lookup.
//!
//! # Usage
//! ```rust,no_run
//! # async fn run() -> Result<(), chainselector_server::ServerError> {
//! use chainselector_server::{init_tracing, serve, ServerConfig};
//!
//! let config = ServerConfig::default().apply_env()?;
//! init_tracing(&config.log);
//! serve(config).await
//! # }
//! ```

use std::sync::Arc;

use chainselector_lookup::{CachedLookup, FourByteClient, MemorySignatureLookup, SignatureLookup};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod tracing_setup;

pub use config::ServerConfig;
pub use error::ServerError;
pub use routes::{router, AppState};
pub use tracing_setup::{init_tracing, LogConfig};

/// Build the signature source described by `config`.
///
/// Offline mode answers from the bundled examples. Otherwise 4byte.directory
/// is queried through a freshness cache of `lookup.revalidate_secs`.
pub fn build_lookup(config: &ServerConfig) -> Result<Arc<dyn SignatureLookup>, ServerError> {
    if config.offline {
        return Ok(Arc::new(MemorySignatureLookup::with_examples()));
    }
    let client = FourByteClient::new(config.lookup.clone())?;
    Ok(Arc::new(CachedLookup::new(client, config.lookup.revalidate())))
}

/// Bind `config.bind` and serve the API until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let lookup = build_lookup(&config)?;
    let mut app = router(AppState::new(lookup));
    if config.cors {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        offline = config.offline,
        upstream = %config.lookup.base_url,
        "chainselector server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
