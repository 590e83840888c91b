//! Context11 Test Utilities
//!
//! Shared test infrastructure for the Context11 workspace:
//! - Fixtures for knowledge base entities and rich-text content
//! - An in-process mock of the remote REST API that records every request

pub use context11_core::{
    Document, Folder, FolderDocument, FolderDocuments, FolderRef, RichTextNode, SearchResult,
};

// Re-export HTTP vocabulary used when registering mocks
pub use axum::http::{Method, StatusCode};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

/// Credential used by tests talking to [`MockApi`].
pub const TEST_CREDENTIAL: &str = "test-api-key";

// ============================================================================
// FIXTURES
// ============================================================================

/// Serialize a document made of one paragraph per entry.
pub fn rich_text_doc(paragraphs: &[&str]) -> String {
    let doc = RichTextNode::doc(
        paragraphs
            .iter()
            .map(|p| RichTextNode::paragraph(vec![RichTextNode::text(*p)]))
            .collect(),
    );
    serde_json::to_string(&doc).unwrap_or_default()
}

pub fn sample_document(id: &str) -> Document {
    Document {
        id: id.to_string(),
        title: "Coding Guidelines".to_string(),
        content: rich_text_doc(&["Write tests.", "Keep functions small."]),
        folder_id: "folder-eng".to_string(),
        folder_name: "Engineering".to_string(),
        created_at: "2024-03-01T10:00:00.000Z".to_string(),
        updated_at: "2024-03-05T16:30:00.000Z".to_string(),
    }
}

pub fn sample_search_result(rank: usize) -> SearchResult {
    SearchResult {
        score: 1.0 / (rank as f64 + 1.0),
        document_id: format!("doc-{rank}"),
        folder_id: "folder-eng".to_string(),
        title: format!("Result {rank}"),
        preview: format!("Preview of result {rank}"),
        chunk_index: rank as i64,
    }
}

pub fn sample_folder(id: &str, name: &str, parent_id: Option<&str>) -> Folder {
    Folder {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: parent_id.map(str::to_string),
        document_count: 3,
        child_folder_count: 1,
    }
}

pub fn sample_folder_documents(folder_id: &str, name: &str, count: usize) -> FolderDocuments {
    FolderDocuments {
        folder: FolderRef {
            id: folder_id.to_string(),
            name: name.to_string(),
        },
        documents: (0..count)
            .map(|i| FolderDocument {
                id: format!("doc-{i}"),
                title: format!("Document {i}"),
                created_at: "2024-03-01T10:00:00.000Z".to_string(),
                updated_at: "2024-03-02T10:00:00.000Z".to_string(),
            })
            .collect(),
    }
}

// ============================================================================
// MOCK REST API
// ============================================================================

/// Canned response for a mocked route.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl MockResponse {
    /// 200 with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: value.to_string(),
        }
    }

    /// Arbitrary status with a plain-text body.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.into(),
        }
    }

    /// 200 whose body is not valid JSON.
    pub fn malformed() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: "{not json".to_string(),
        }
    }
}

/// A request received by [`MockApi`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<(Method, String), MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-process stand-in for the remote knowledge base.
///
/// Unmatched routes answer `404` with body `no mock for <METHOD> <path>`.
/// The server task is aborted when the value is dropped.
pub struct MockApi {
    base_url: String,
    state: Arc<MockState>,
    server: JoinHandle<()>,
}

impl MockApi {
    pub async fn start() -> std::io::Result<Self> {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(record_and_respond)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
            server,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register (or replace) the response for `method path`.
    pub fn mock(&self, method: Method, path: &str, response: MockResponse) -> &Self {
        lock(&self.state.routes).insert((method, path.to_string()), response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.state.requests).len()
    }

    /// The only request received; `None` unless exactly one arrived.
    pub fn single_request(&self) -> Option<RecordedRequest> {
        let requests = lock(&self.state.requests);
        match requests.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        }
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn record_and_respond(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    lock(&state.requests).push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let canned = lock(&state.routes).get(&(method.clone(), path.clone())).cloned();
    match canned {
        Some(response) => (
            response.status,
            [(header::CONTENT_TYPE, response.content_type)],
            response.body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("no mock for {} {}", method, path),
        )
            .into_response(),
    }
}
