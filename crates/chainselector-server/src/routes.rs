//! HTTP routes.
//!
//! ```text
//! GET /api/lookup?hex=0xa9059cbb          → { hex, signatures }
//! GET /api/selector?signature=transfer(…) → { input, canonical, selector }
//! GET /api/examples                       → [{ input, canonical, selector }, …]
//! GET /health                             → ok
//! ```
//!
//! Errors are `{ "error": "<message>" }` with 400 for bad input and 502 when
//! the signature database cannot be used.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use chainselector_core::{decode_signature, DecodedSignature, Selector, EXAMPLE_SIGNATURES};
use chainselector_lookup::SignatureLookup;

pub const MISSING_HEX: &str = "Missing hex query parameter";
pub const INVALID_HEX: &str = "Invalid hex: must be 4 bytes (8 hex chars), e.g. 0xa9059cbb";
pub const MISSING_SIGNATURE: &str = "Missing signature query parameter";
pub const SERVICE_UNAVAILABLE: &str = "Lookup service unavailable";
pub const LOOKUP_FAILED: &str = "Lookup failed";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn SignatureLookup>,
}

impl AppState {
    pub fn new(lookup: Arc<dyn SignatureLookup>) -> Self {
        Self { lookup }
    }
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub hex: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectorParams {
    pub signature: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    pub hex: String,
    pub signatures: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/lookup", get(lookup))
        .route("/api/selector", get(selector))
        .route("/api/examples", get(examples))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

async fn lookup(State(state): State<AppState>, Query(params): Query<LookupParams>) -> Response {
    let Some(raw) = params.hex.filter(|h| !h.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, MISSING_HEX);
    };
    let Some(selector) = Selector::from_hex(&raw) else {
        tracing::debug!(input = %raw, "rejected invalid selector hex");
        return error_response(StatusCode::BAD_REQUEST, INVALID_HEX);
    };

    match state.lookup.lookup(selector).await {
        Ok(signatures) => {
            tracing::info!(
                selector = %selector,
                count = signatures.len(),
                source = state.lookup.name(),
                "selector resolved"
            );
            Json(LookupResponse {
                hex: selector.to_hex(),
                signatures,
            })
            .into_response()
        }
        Err(e) if e.is_client_error() => error_response(StatusCode::BAD_REQUEST, INVALID_HEX),
        Err(e) => {
            tracing::warn!(selector = %selector, error = %e, "selector lookup failed");
            let message = if e.is_unavailable() {
                SERVICE_UNAVAILABLE
            } else {
                LOOKUP_FAILED
            };
            error_response(StatusCode::BAD_GATEWAY, message)
        }
    }
}

async fn selector(Query(params): Query<SelectorParams>) -> Response {
    match params.signature.as_deref().and_then(decode_signature) {
        Some(decoded) => Json(decoded).into_response(),
        None => error_response(StatusCode::BAD_REQUEST, MISSING_SIGNATURE),
    }
}

async fn examples() -> Json<Vec<DecodedSignature>> {
    Json(
        EXAMPLE_SIGNATURES
            .iter()
            .filter_map(|sig| decode_signature(sig))
            .collect(),
    )
}

async fn health() -> &'static str {
    "ok"
}
