//! Error types for the MCP server.

use crate::mcp::tools::ToolName;
use crate::mcp::types::JsonRpcError;
use context11_client::ClientError;
use std::net::SocketAddr;

/// Failure of a single tool operation. Rendered into an error-flagged tool
/// result, never surfaced as a protocol error.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Local precondition failure; no request was sent.
    #[error("{0}")]
    Validation(String),
}

pub type ToolResult<T> = Result<T, ToolError>;

/// A `tools/call` that cannot be routed to a tool at all.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Invalid arguments for tool {tool}: {source}")]
    InvalidArguments {
        tool: ToolName,
        source: serde_json::Error,
    },
}

impl From<DispatchError> for JsonRpcError {
    fn from(err: DispatchError) -> Self {
        JsonRpcError::invalid_params(err.to_string())
    }
}

/// Configuration could not be loaded from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} environment variable is required")]
    MissingRequired { field: &'static str },
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Process-level failure of either binary.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] ClientError),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to initialize tracing: {0}")]
    Telemetry(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_is_transparent() {
        let err = ToolError::from(ClientError::Api {
            status: 404,
            body: "not found".to_string(),
        });
        assert_eq!(err.to_string(), "API error (404): not found");
    }

    #[test]
    fn test_missing_required_message() {
        let err = ConfigError::MissingRequired {
            field: "CONTEXT11_API_KEY",
        };
        assert_eq!(
            err.to_string(),
            "CONTEXT11_API_KEY environment variable is required"
        );
    }

    #[test]
    fn test_dispatch_error_maps_to_invalid_params() {
        let rpc: JsonRpcError = DispatchError::UnknownTool("x".to_string()).into();
        assert_eq!(rpc.code, crate::mcp::types::INVALID_PARAMS);
        assert_eq!(rpc.message, "Unknown tool: x");
    }
}
