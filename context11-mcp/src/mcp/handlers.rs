//! Tool Registry: runs tool calls against the knowledge base.

use super::format;
use super::tools::*;
use super::types::{CallToolResult, Tool};
use crate::error::{DispatchError, ToolError, ToolResult};
use context11_client::{ApiContext, RequestClient};
use context11_core::DocumentPatch;
use serde_json::Value as JsonValue;

/// Message returned when `update_document` has nothing to change.
pub const EMPTY_UPDATE_MESSAGE: &str = "At least one of 'title' or 'content' must be provided.";

/// Maps tool invocations to REST calls and renders their results as text.
///
/// Stateless apart from the shared HTTP client; every call carries its own
/// [`ApiContext`].
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: RequestClient,
}

impl ToolRegistry {
    pub fn new(client: RequestClient) -> Self {
        Self { client }
    }

    pub fn tools(&self) -> Vec<Tool> {
        available_tools()
    }

    /// Decode and run one tool call.
    ///
    /// Failures of the tool itself come back as an error-flagged result;
    /// only an unknown tool or undecodable arguments are `Err`.
    pub async fn call(
        &self,
        ctx: &ApiContext,
        name: &str,
        arguments: Option<JsonValue>,
    ) -> Result<CallToolResult, DispatchError> {
        let call = ToolCall::parse(name, arguments)?;
        Ok(self.run(ctx, call).await)
    }

    /// Run an already-decoded call.
    pub async fn run(&self, ctx: &ApiContext, call: ToolCall) -> CallToolResult {
        let tool = call.tool();
        tracing::debug!(tool = %tool, "MCP tool call");

        match self.execute(ctx, call).await {
            Ok(text) => {
                tracing::info!(tool = %tool, is_error = false, "MCP tool call completed");
                CallToolResult::text(text)
            }
            Err(err) => {
                tracing::warn!(tool = %tool, is_error = true, error = %err, "MCP tool call failed");
                let text = match &err {
                    ToolError::Validation(message) => format::validation_failure(message),
                    ToolError::Client(client_err) => {
                        format::tool_failure(tool, &client_err.to_string())
                    }
                };
                CallToolResult::error(text)
            }
        }
    }

    async fn execute(&self, ctx: &ApiContext, call: ToolCall) -> ToolResult<String> {
        match call {
            ToolCall::SearchContext(args) => {
                let results = self.client.search(ctx, &args.query, args.limit).await?;
                Ok(format::search_results(&results))
            }

            ToolCall::GetDocument(args) => {
                let doc = self.client.get_document(ctx, &args.id).await?;
                Ok(format::document_overview(&doc))
            }

            ToolCall::ListFolders => {
                let folders = self.client.list_folders(ctx).await?;
                Ok(format::folders(&folders))
            }

            ToolCall::ListDocuments(args) => {
                let listing = self.client.list_folder_documents(ctx, &args.folder_id).await?;
                Ok(format::folder_documents(&listing))
            }

            ToolCall::ReadDocument(args) => {
                let doc = self.client.get_document(ctx, &args.document_id).await?;
                Ok(format::document_detail(&doc))
            }

            ToolCall::UpdateDocument(args) => {
                let patch = DocumentPatch::new(args.title, args.content);
                if patch.is_empty() {
                    return Err(ToolError::Validation(EMPTY_UPDATE_MESSAGE.to_string()));
                }
                let doc = self
                    .client
                    .update_document(ctx, &args.document_id, &patch)
                    .await?;
                Ok(format::updated_document(&doc))
            }
        }
    }
}
