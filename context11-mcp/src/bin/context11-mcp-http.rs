//! Context11 MCP HTTP server entry point.

use context11_mcp::transport::serve_http;
use context11_mcp::{build_server, init_tracing, HttpConfig, ServerResult, TelemetryConfig};

#[tokio::main]
async fn main() -> ServerResult<()> {
    init_tracing(&TelemetryConfig::from_env("context11-mcp-http"))?;

    let config = HttpConfig::from_env().map_err(|err| {
        tracing::error!(error = %err, "Invalid configuration");
        err
    })?;

    let server = build_server()?;
    serve_http(&config, server).await?;
    Ok(())
}
