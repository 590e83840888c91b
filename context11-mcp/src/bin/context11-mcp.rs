//! Context11 MCP stdio server entry point.

use context11_mcp::transport::serve_stdio;
use context11_mcp::{build_server, init_tracing, ServerResult, StdioConfig, TelemetryConfig};

#[tokio::main]
async fn main() -> ServerResult<()> {
    init_tracing(&TelemetryConfig::from_env("context11-mcp"))?;

    let config = StdioConfig::from_env().map_err(|err| {
        tracing::error!(error = %err, "Invalid configuration");
        err
    })?;

    let server = build_server()?;
    let ctx = config.api_context();
    serve_stdio(&server, &ctx).await?;
    Ok(())
}
