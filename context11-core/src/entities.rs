//! Knowledge base entities as returned by the remote REST API.
//!
//! Entities are owned by the remote service. They are decoded per call and
//! dropped once the tool output is produced.

use serde::{Deserialize, Serialize};

// ============================================================================
// SEARCH
// ============================================================================

/// A single semantic search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Relevance score, higher is better
    pub score: f64,
    pub document_id: String,
    pub folder_id: String,
    pub title: String,
    /// Snippet of the matching chunk
    pub preview: String,
    /// Index of the matching chunk within the document
    pub chunk_index: i64,
}

/// Request body of `POST /api/mcp/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
}

/// Response body of `POST /api/mcp/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

// ============================================================================
// DOCUMENTS
// ============================================================================

/// A document with its serialized rich-text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    /// Serialized rich-text tree (see [`crate::RichTextNode`]). Legacy
    /// documents may hold plain text here. Missing or `null` decodes as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    pub folder_id: String,
    pub folder_name: String,
    pub created_at: String,
    pub updated_at: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Partial update sent with `PATCH /api/mcp/documents/{id}`. Absent fields
/// are left untouched by the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Serialized rich-text tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl DocumentPatch {
    /// Build a patch from optional inputs; empty strings count as absent.
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            content: content.filter(|c| !c.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

// ============================================================================
// FOLDERS
// ============================================================================

/// A workspace folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Lookup key of the parent folder; `None` for root-level folders
    #[serde(default)]
    pub parent_id: Option<String>,
    pub document_count: u64,
    pub child_folder_count: u64,
}

impl Folder {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Body of `GET /api/mcp/folders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderList {
    pub folders: Vec<Folder>,
}

/// Minimal folder reference embedded in folder listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRef {
    pub id: String,
    pub name: String,
}

/// Document summary (no content) as listed inside a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDocument {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of `GET /api/mcp/folders/{folderId}/documents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderDocuments {
    pub folder: FolderRef,
    pub documents: Vec<FolderDocument>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result_uses_camel_case() {
        let result: SearchResult = serde_json::from_value(json!({
            "score": 0.91,
            "documentId": "doc-1",
            "folderId": "folder-1",
            "title": "Guidelines",
            "preview": "Always write tests",
            "chunkIndex": 3
        }))
        .unwrap();

        assert_eq!(result.document_id, "doc-1");
        assert_eq!(result.chunk_index, 3);
    }

    #[test]
    fn test_folder_parent_is_optional() {
        let root: Folder = serde_json::from_value(json!({
            "id": "f1",
            "name": "Root",
            "parentId": null,
            "documentCount": 2,
            "childFolderCount": 1
        }))
        .unwrap();
        assert!(root.is_root());

        let missing: Folder = serde_json::from_value(json!({
            "id": "f2",
            "name": "Loose",
            "documentCount": 0,
            "childFolderCount": 0
        }))
        .unwrap();
        assert!(missing.is_root());

        let child: Folder = serde_json::from_value(json!({
            "id": "f3",
            "name": "Child",
            "parentId": "f1",
            "documentCount": 0,
            "childFolderCount": 0
        }))
        .unwrap();
        assert_eq!(child.parent_id.as_deref(), Some("f1"));
    }

    #[test]
    fn test_document_null_or_missing_content_is_empty() {
        let fields = json!({
            "id": "doc-1",
            "title": "Notes",
            "folderId": "folder-1",
            "folderName": "Work",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        });

        let mut null_content = fields.clone();
        null_content["content"] = serde_json::Value::Null;
        let doc: Document = serde_json::from_value(null_content).unwrap();
        assert_eq!(doc.content, "");
        assert_eq!(crate::extract_text(&doc.content), "");

        let doc: Document = serde_json::from_value(fields).unwrap();
        assert_eq!(doc.content, "");
    }

    #[test]
    fn test_document_patch_skips_absent_fields() {
        let patch = DocumentPatch::new(Some("New title".to_string()), None);
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"title": "New title"}));

        let patch = DocumentPatch::new(Some(String::new()), Some(String::new()));
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({}));
    }

    #[test]
    fn test_document_ignores_unknown_fields() {
        let doc: Document = serde_json::from_value(json!({
            "id": "d1",
            "title": "Doc",
            "content": "plain",
            "folderId": "f1",
            "folderName": "Folder",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "ownerId": "someone"
        }))
        .unwrap();
        assert_eq!(doc.folder_name, "Folder");
    }
}
