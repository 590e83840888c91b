//! Context11 MCP Server
//!
//! Exposes the Context11 knowledge base (search, folders, documents) as MCP
//! tools over two transports:
//! - stdio: one credential per process, from `CONTEXT11_API_KEY`
//! - HTTP: one credential per request, from the `X-API-Key` header

pub mod config;
pub mod error;
pub mod mcp;
pub mod telemetry;
pub mod transport;

pub use config::{HttpConfig, StdioConfig};
pub use error::{ConfigError, DispatchError, ServerError, ServerResult, ToolError, ToolResult};
pub use mcp::{McpServer, ToolCall, ToolName, ToolRegistry};
pub use telemetry::{init_tracing, LogFormat, TelemetryConfig};

use context11_client::RequestClient;

/// Build a server backed by a fresh HTTP client.
pub fn build_server() -> ServerResult<McpServer> {
    let client = RequestClient::new()?;
    Ok(McpServer::new(ToolRegistry::new(client)))
}
