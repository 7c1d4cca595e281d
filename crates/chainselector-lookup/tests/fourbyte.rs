//! HTTP-level tests for `FourByteClient` against an in-process fake of the
//! 4byte.directory API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chainselector_lookup::{
    CachedLookup, FourByteClient, LookupConfig, LookupError, SignatureLookup,
};
use serde_json::json;

// ─── Fake server ──────────────────────────────────────────────────────────────

async fn signatures(
    State(addr): State<SocketAddr>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let hex = params.get("hex_signature").map(String::as_str).unwrap_or("");
    let page = params.get("page").map(String::as_str);

    match (hex, page) {
        ("0xa9059cbb", None) => Json(json!({
            "count": 3,
            "next": format!("http://{addr}/api/v1/signatures/?hex_signature=0xa9059cbb&page=2"),
            "previous": null,
            "results": [
                { "id": 1, "text_signature": "transfer(address,uint256)", "hex_signature": "0xa9059cbb" },
                { "id": 2, "text_signature": "many_msg_babbage(bytes1)", "hex_signature": "0xa9059cbb" }
            ]
        }))
        .into_response(),
        ("0xa9059cbb", Some("2")) => Json(json!({
            "count": 3,
            "next": null,
            "previous": null,
            "results": [
                { "id": 3, "text_signature": "transfer(bytes4[9],bytes5[6],int48[11])", "hex_signature": "0xa9059cbb" }
            ]
        }))
        .into_response(),
        ("0x00000004", _) => Json(json!({
            "count": 2,
            "next": "http://203.0.113.7/api/v1/signatures/?hex_signature=0x00000004&page=2",
            "previous": null,
            "results": [
                { "id": 4, "text_signature": "offsite()", "hex_signature": "0x00000004" }
            ]
        }))
        .into_response(),
        ("0xdeadbeef", _) => Json(json!({ "count": 0, "next": null, "results": [] })).into_response(),
        ("0x00000001", _) => (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response(),
        ("0x00000002", _) => (StatusCode::TOO_MANY_REQUESTS, "slow down").into_response(),
        ("0x00000003", _) => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => (StatusCode::BAD_REQUEST, "unexpected query").into_response(),
    }
}

async fn spawn_fake() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/api/v1/signatures/", get(signatures))
        .with_state(addr);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, max_pages: usize) -> FourByteClient {
    let config = LookupConfig {
        max_pages,
        timeout_secs: 5,
        ..LookupConfig::default().with_base_url(format!("http://{addr}"))
    };
    FourByteClient::new(config).unwrap()
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn first_page_only_by_default() {
    let addr = spawn_fake().await;
    let sigs = client(addr, 1).lookup_hex("0xA9059CBB").await.unwrap();
    assert_eq!(sigs, vec!["transfer(address,uint256)", "many_msg_babbage(bytes1)"]);
}

#[tokio::test]
async fn follows_next_links_up_to_page_limit() {
    let addr = spawn_fake().await;
    let sigs = client(addr, 5).lookup_hex("a9059cbb").await.unwrap();
    assert_eq!(
        sigs,
        vec![
            "transfer(address,uint256)",
            "many_msg_babbage(bytes1)",
            "transfer(bytes4[9],bytes5[6],int48[11])",
        ]
    );
}

#[tokio::test]
async fn next_link_to_another_host_is_not_followed() {
    let addr = spawn_fake().await;
    let sigs = client(addr, 5).lookup_hex("0x00000004").await.unwrap();
    assert_eq!(sigs, vec!["offsite()"]);
}

#[tokio::test]
async fn unknown_selector_is_empty_list() {
    let addr = spawn_fake().await;
    let sigs = client(addr, 1).lookup_hex("0xdeadbeef").await.unwrap();
    assert!(sigs.is_empty());
}

#[tokio::test]
async fn error_status_is_unavailable() {
    let addr = spawn_fake().await;
    let err = client(addr, 1).lookup_hex("0x00000001").await.unwrap_err();
    assert!(
        matches!(err, LookupError::Unavailable { status: 503, .. }),
        "got: {err:?}"
    );
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let addr = spawn_fake().await;
    let err = client(addr, 1).lookup_hex("0x00000002").await.unwrap_err();
    assert!(matches!(err, LookupError::RateLimited { .. }), "got: {err:?}");
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
    let addr = spawn_fake().await;
    let err = client(addr, 1).lookup_hex("0x00000003").await.unwrap_err();
    assert!(matches!(err, LookupError::InvalidResponse { .. }), "got: {err:?}");
    assert!(!err.is_unavailable());
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr, 1).lookup_hex("0xa9059cbb").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)), "got: {err:?}");
}

#[tokio::test]
async fn invalid_hex_never_reaches_the_network() {
    let addr = spawn_fake().await;
    let err = client(addr, 1).lookup_hex("zzzzzzzz").await.unwrap_err();
    assert!(err.is_client_error());
}

#[tokio::test]
async fn cached_client_reuses_fresh_results() {
    let addr = spawn_fake().await;
    let cached = CachedLookup::new(client(addr, 1), Duration::from_secs(60));

    let first = cached.lookup_hex("0xa9059cbb").await.unwrap();
    let second = cached.lookup_hex("0xa9059cbb").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(cached.len(), 1);
    assert_eq!(cached.name(), "4byte.directory");
}
