//! HTTP transport tests, driven in-process with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use context11_client::RequestClient;
use context11_mcp::mcp::McpServer;
use context11_mcp::transport::{create_router, HealthResponse, HttpState};
use context11_mcp::ToolRegistry;
use context11_test_utils::*;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(api_url: &str) -> Router {
    let client = RequestClient::new().expect("client should build");
    let server = McpServer::new(ToolRegistry::new(client));
    create_router(HttpState::new(server, api_url))
}

fn mcp_request(api_key: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_health() {
    let response = app("http://127.0.0.1:9")
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_missing_credential_is_rejected() {
    let api = MockApi::start().await.unwrap();

    let response = app(api.base_url())
        .oneshot(mcp_request(
            None,
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        body,
        json!({
            "jsonrpc": "2.0",
            "error": {"code": -32001, "message": "Missing credential"},
            "id": null
        })
    );
    assert_eq!(api.request_count(), 0);
}

#[tokio::test]
async fn test_empty_credential_is_rejected() {
    let response = app("http://127.0.0.1:9")
        .oneshot(mcp_request(
            Some(""),
            json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_header_credential_is_forwarded() {
    let api = MockApi::start().await.unwrap();
    api.mock(
        Method::GET,
        "/api/mcp/folders",
        MockResponse::json(json!({"folders": []})),
    );

    let response = app(api.base_url())
        .oneshot(mcp_request(
            Some("caller-key"),
            json!({
                "jsonrpc": "2.0",
                "id": 9,
                "method": "tools/call",
                "params": {"name": "list_folders", "arguments": {}}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["id"], 9);
    assert_eq!(
        body["result"]["content"][0]["text"],
        "No folders found in the workspace."
    );

    let request = api.single_request().expect("exactly one request");
    assert_eq!(request.header("authorization"), Some("Bearer caller-key"));
}

#[tokio::test]
async fn test_notification_is_accepted() {
    let response = app("http://127.0.0.1:9")
        .oneshot(mcp_request(
            Some("key"),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("x-api-key", "key")
        .body(Body::from("{oops"))
        .unwrap();

    let response = app("http://127.0.0.1:9").oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"]["code"], -32700);
}
