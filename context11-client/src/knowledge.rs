//! Typed endpoints of the knowledge base API.

use crate::client::{ApiRequest, RequestClient};
use crate::context::ApiContext;
use crate::error::ClientResult;
use context11_core::{
    Document, DocumentPatch, Folder, FolderDocuments, FolderList, SearchRequest, SearchResponse,
    SearchResult,
};

pub const SEARCH_ENDPOINT: &str = "/api/mcp/search";
pub const FOLDERS_ENDPOINT: &str = "/api/mcp/folders";

/// `/api/mcp/documents/{id}`; the id is inserted as given.
pub fn document_endpoint(document_id: &str) -> String {
    format!("/api/mcp/documents/{}", document_id)
}

/// `/api/mcp/folders/{id}/documents`; the id is inserted as given.
pub fn folder_documents_endpoint(folder_id: &str) -> String {
    format!("/api/mcp/folders/{}/documents", folder_id)
}

impl RequestClient {
    pub async fn search(
        &self,
        ctx: &ApiContext,
        query: &str,
        limit: u32,
    ) -> ClientResult<Vec<SearchResult>> {
        let body = serde_json::to_value(SearchRequest {
            query: query.to_string(),
            limit,
        })?;
        let response: SearchResponse = self
            .request(ctx, ApiRequest::post(SEARCH_ENDPOINT).json(body))
            .await?;
        Ok(response.results)
    }

    pub async fn get_document(&self, ctx: &ApiContext, document_id: &str) -> ClientResult<Document> {
        self.request(ctx, ApiRequest::get(document_endpoint(document_id)))
            .await
    }

    pub async fn list_folders(&self, ctx: &ApiContext) -> ClientResult<Vec<Folder>> {
        let response: FolderList = self
            .request(ctx, ApiRequest::get(FOLDERS_ENDPOINT))
            .await?;
        Ok(response.folders)
    }

    pub async fn list_folder_documents(
        &self,
        ctx: &ApiContext,
        folder_id: &str,
    ) -> ClientResult<FolderDocuments> {
        self.request(ctx, ApiRequest::get(folder_documents_endpoint(folder_id)))
            .await
    }

    /// Send a partial update. Only the fields present in `patch` are sent.
    pub async fn update_document(
        &self,
        ctx: &ApiContext,
        document_id: &str,
        patch: &DocumentPatch,
    ) -> ClientResult<Document> {
        let body = serde_json::to_value(patch)?;
        self.request(ctx, ApiRequest::patch(document_endpoint(document_id)).json(body))
            .await
    }
}
