//! Transports carrying JSON-RPC messages to [`crate::mcp::McpServer`].

pub mod http;
pub mod stdio;

pub use http::{create_router, serve_http, HealthResponse, HttpState, API_KEY_HEADER};
pub use stdio::{serve_lines, serve_stdio};
