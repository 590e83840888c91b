//! Context11 Client - Knowledge Base REST Client
//!
//! Issues authenticated JSON requests against the knowledge base API and
//! maps failures into [`ClientError`]. Every call takes an explicit
//! [`ApiContext`] (credential + base URL); nothing is read from the
//! environment here.

pub mod client;
pub mod context;
pub mod error;
pub mod knowledge;

pub use client::{ApiRequest, RequestClient};
pub use context::{ApiContext, DEFAULT_API_URL};
pub use error::{ClientError, ClientResult};
pub use knowledge::{
    document_endpoint, folder_documents_endpoint, FOLDERS_ENDPOINT, SEARCH_ENDPOINT,
};

pub use reqwest::Method;
