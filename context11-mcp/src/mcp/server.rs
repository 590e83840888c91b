//! JSON-RPC dispatcher shared by both transports.

use super::handlers::ToolRegistry;
use super::types::*;
use context11_client::ApiContext;
use serde_json::Value as JsonValue;

/// Server name reported in `initialize`.
pub const SERVER_NAME: &str = "context11";

/// Stateless MCP server: decodes one JSON-RPC message, routes it, and
/// builds the response. No session state is kept between messages.
#[derive(Debug, Clone)]
pub struct McpServer {
    registry: ToolRegistry,
    info: Implementation,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one raw message. Returns `None` for notifications.
    pub async fn handle_message(&self, ctx: &ApiContext, raw: &[u8]) -> Option<JsonRpcResponse> {
        let value: JsonValue = match serde_json::from_slice(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "Rejected malformed JSON-RPC message");
                return Some(JsonRpcResponse::failure(
                    JsonValue::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        // Batches are not supported; only a single request object is.
        if !value.is_object() {
            return Some(JsonRpcResponse::failure(
                JsonValue::Null,
                JsonRpcError::invalid_request("Invalid Request: expected a JSON object"),
            ));
        }

        // Best-effort id so Invalid Request errors can still be correlated.
        let fallback_id = value.get("id").cloned().unwrap_or(JsonValue::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(err) => {
                return Some(JsonRpcResponse::failure(
                    fallback_id,
                    JsonRpcError::invalid_request(format!("Invalid Request: {}", err)),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::failure(
                fallback_id,
                JsonRpcError::invalid_request("Invalid Request: jsonrpc must be \"2.0\""),
            ));
        }

        self.handle_request(ctx, request).await
    }

    /// Handle a decoded request. Returns `None` for notifications.
    pub async fn handle_request(
        &self,
        ctx: &ApiContext,
        request: JsonRpcRequest,
    ) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            tracing::debug!(method = %request.method, "MCP notification");
            return None;
        };

        let response = match self.dispatch(ctx, &request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => {
                tracing::debug!(
                    method = %request.method,
                    code = error.code,
                    "MCP request failed"
                );
                JsonRpcResponse::failure(id, error)
            }
        };
        Some(response)
    }

    async fn dispatch(
        &self,
        ctx: &ApiContext,
        method: &str,
        params: Option<JsonValue>,
    ) -> Result<JsonValue, JsonRpcError> {
        match method {
            "initialize" => {
                let params: InitializeParams = decode_params(params)?;
                to_result(&self.initialize(params))
            }
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_result(&ListToolsResult {
                tools: self.registry.tools(),
            }),
            "tools/call" => {
                let params: CallToolParams = decode_params(params)?;
                let result = self
                    .registry
                    .call(ctx, &params.name, params.arguments)
                    .await?;
                to_result(&result)
            }
            other => Err(JsonRpcError::method_not_found(other)),
        }
    }

    fn initialize(&self, params: InitializeParams) -> InitializeResult {
        tracing::info!(
            client_name = params.client_info.as_ref().map(|c| c.name.as_str()).unwrap_or("unknown"),
            protocol_version = %params.protocol_version,
            "MCP session initialized"
        );

        InitializeResult {
            protocol_version: negotiate_protocol_version(&params.protocol_version).to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: self.info.clone(),
        }
    }
}

/// Echo the requested version when supported, otherwise offer the latest.
pub fn negotiate_protocol_version(requested: &str) -> &'static str {
    SUPPORTED_PROTOCOL_VERSIONS
        .iter()
        .copied()
        .find(|v| *v == requested)
        .unwrap_or(LATEST_PROTOCOL_VERSION)
}

fn decode_params<T: serde::de::DeserializeOwned>(
    params: Option<JsonValue>,
) -> Result<T, JsonRpcError> {
    let params = params.unwrap_or_else(|| JsonValue::Object(Default::default()));
    serde_json::from_value(params)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {}", e)))
}

fn to_result<T: serde::Serialize>(value: &T) -> Result<JsonValue, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal(e.to_string()))
}
