//! HTTP transport: `POST /mcp` and `GET /health`.

use crate::config::HttpConfig;
use crate::error::{ServerError, ServerResult};
use crate::mcp::{JsonRpcError, JsonRpcResponse, McpServer};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use context11_client::ApiContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Header carrying the caller's knowledge base credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Shared state for the HTTP routes.
#[derive(Clone)]
pub struct HttpState {
    server: Arc<McpServer>,
    api_url: Arc<str>,
}

impl HttpState {
    pub fn new(server: McpServer, api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            server: Arc::new(server),
            api_url: Arc::from(api_url),
        }
    }
}

/// Create the HTTP router.
pub fn create_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/mcp", post(mcp_endpoint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /mcp
///
/// Rejects requests without a credential before any tool code runs; builds a
/// fresh [`ApiContext`] per request otherwise.
async fn mcp_endpoint(State(state): State<HttpState>, headers: HeaderMap, body: Bytes) -> Response {
    let Some(credential) = credential_from_headers(&headers) else {
        tracing::warn!("Rejected MCP request without credential");
        let error = JsonRpcResponse::failure(
            serde_json::Value::Null,
            JsonRpcError::missing_credential(),
        );
        return (StatusCode::UNAUTHORIZED, Json(error)).into_response();
    };

    let ctx = ApiContext::new(credential, state.api_url.as_ref());
    match state.server.handle_message(&ctx, &body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

fn credential_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Bind and serve until Ctrl-C.
pub async fn serve_http(config: &HttpConfig, server: McpServer) -> ServerResult<()> {
    let addr = config.bind_addr()?;
    let app = create_router(HttpState::new(server, config.api_url.clone()));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%addr, api_url = %config.api_url, "Context11 MCP HTTP server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
