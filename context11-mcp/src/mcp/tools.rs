//! MCP tool definitions and typed tool arguments

use super::types::Tool;
use crate::error::DispatchError;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Default number of search results when the caller gives no `limit`.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// The six knowledge base tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SearchContext,
    GetDocument,
    ListFolders,
    ListDocuments,
    ReadDocument,
    UpdateDocument,
}

impl ToolName {
    pub const ALL: [ToolName; 6] = [
        ToolName::SearchContext,
        ToolName::GetDocument,
        ToolName::ListFolders,
        ToolName::ListDocuments,
        ToolName::ReadDocument,
        ToolName::UpdateDocument,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::SearchContext => "search_context",
            ToolName::GetDocument => "get_document",
            ToolName::ListFolders => "list_folders",
            ToolName::ListDocuments => "list_documents",
            ToolName::ReadDocument => "read_document",
            ToolName::UpdateDocument => "update_document",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    /// What the tool was doing, as used in `Error <activity>: <message>`.
    pub fn activity(&self) -> &'static str {
        match self {
            ToolName::SearchContext => "searching knowledge base",
            ToolName::GetDocument => "retrieving document",
            ToolName::ListFolders => "listing folders",
            ToolName::ListDocuments => "listing documents",
            ToolName::ReadDocument => "reading document",
            ToolName::UpdateDocument => "updating document",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolName::SearchContext => {
                "Search the company knowledge base for relevant context, guidelines, and rules"
            }
            ToolName::GetDocument => "Get the full content of a specific document by ID",
            ToolName::ListFolders => "List all folders in the workspace",
            ToolName::ListDocuments => "List all documents in a specific folder",
            ToolName::ReadDocument => "Read a document's full content by ID",
            ToolName::UpdateDocument => {
                "Update a document's title and/or content. Content must be in Tiptap JSON format."
            }
        }
    }

    pub fn input_schema(&self) -> JsonValue {
        match self {
            ToolName::SearchContext => serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "What to search for in the knowledge base"
                    },
                    "limit": {
                        "type": "number",
                        "default": DEFAULT_SEARCH_LIMIT,
                        "description": "Maximum number of results to return (default: 10)"
                    }
                },
                "required": ["query"]
            }),
            ToolName::GetDocument => serde_json::json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Document ID from search results"
                    }
                },
                "required": ["id"]
            }),
            ToolName::ListFolders => serde_json::json!({
                "type": "object",
                "properties": {}
            }),
            ToolName::ListDocuments => serde_json::json!({
                "type": "object",
                "properties": {
                    "folderId": {
                        "type": "string",
                        "description": "The folder ID to list documents from"
                    }
                },
                "required": ["folderId"]
            }),
            ToolName::ReadDocument => serde_json::json!({
                "type": "object",
                "properties": {
                    "documentId": {
                        "type": "string",
                        "description": "The document ID to read"
                    }
                },
                "required": ["documentId"]
            }),
            ToolName::UpdateDocument => serde_json::json!({
                "type": "object",
                "properties": {
                    "documentId": {
                        "type": "string",
                        "description": "The document ID to update"
                    },
                    "title": {
                        "type": "string",
                        "description": "New title for the document"
                    },
                    "content": {
                        "type": "string",
                        "description": "New content in Tiptap JSON format. Example: {\"type\":\"doc\",\"content\":[{\"type\":\"paragraph\",\"content\":[{\"type\":\"text\",\"text\":\"Your text here\"}]}]}"
                    }
                },
                "required": ["documentId"]
            }),
        }
    }

    pub fn definition(&self) -> Tool {
        Tool {
            name: self.as_str().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definitions of every tool, in registration order.
pub fn available_tools() -> Vec<Tool> {
    ToolName::ALL.iter().map(ToolName::definition).collect()
}

// ============================================================================
// TOOL ARGUMENTS
// ============================================================================

fn default_search_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchArgs {
    pub query: String,
    #[serde(default = "default_search_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetDocumentArgs {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsArgs {
    pub folder_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadDocumentArgs {
    pub document_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentArgs {
    pub document_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A tool invocation with its arguments decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    SearchContext(SearchArgs),
    GetDocument(GetDocumentArgs),
    ListFolders,
    ListDocuments(ListDocumentsArgs),
    ReadDocument(ReadDocumentArgs),
    UpdateDocument(UpdateDocumentArgs),
}

impl ToolCall {
    /// Decode `arguments` for the tool called `name`. Missing arguments
    /// decode as an empty object.
    pub fn parse(name: &str, arguments: Option<JsonValue>) -> Result<Self, DispatchError> {
        let tool = ToolName::parse(name).ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;
        let args = match arguments {
            None | Some(JsonValue::Null) => JsonValue::Object(Default::default()),
            Some(value) => value,
        };

        let decode_err = |source| DispatchError::InvalidArguments { tool, source };
        let call = match tool {
            ToolName::SearchContext => {
                ToolCall::SearchContext(serde_json::from_value(args).map_err(decode_err)?)
            }
            ToolName::GetDocument => {
                ToolCall::GetDocument(serde_json::from_value(args).map_err(decode_err)?)
            }
            ToolName::ListFolders => ToolCall::ListFolders,
            ToolName::ListDocuments => {
                ToolCall::ListDocuments(serde_json::from_value(args).map_err(decode_err)?)
            }
            ToolName::ReadDocument => {
                ToolCall::ReadDocument(serde_json::from_value(args).map_err(decode_err)?)
            }
            ToolName::UpdateDocument => {
                ToolCall::UpdateDocument(serde_json::from_value(args).map_err(decode_err)?)
            }
        };
        Ok(call)
    }

    pub fn tool(&self) -> ToolName {
        match self {
            ToolCall::SearchContext(_) => ToolName::SearchContext,
            ToolCall::GetDocument(_) => ToolName::GetDocument,
            ToolCall::ListFolders => ToolName::ListFolders,
            ToolCall::ListDocuments(_) => ToolName::ListDocuments,
            ToolCall::ReadDocument(_) => ToolName::ReadDocument,
            ToolCall::UpdateDocument(_) => ToolName::UpdateDocument,
        }
    }
}
