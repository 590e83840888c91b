//! Model Context Protocol (MCP) layer
//!
//! Tool definitions, the Tool Registry, and the JSON-RPC dispatcher used by
//! the stdio and HTTP transports.

pub mod format;
pub mod handlers;
pub mod server;
pub mod tools;
pub mod types;

pub use handlers::{ToolRegistry, EMPTY_UPDATE_MESSAGE};
pub use server::{negotiate_protocol_version, McpServer, SERVER_NAME};
pub use tools::{available_tools, ToolCall, ToolName, DEFAULT_SEARCH_LIMIT};
pub use types::*;
