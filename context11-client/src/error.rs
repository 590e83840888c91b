//! Error types for the REST client.

/// Failure of a single call against the knowledge base API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The remote host could not be reached or the connection broke.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The remote answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    /// A 2xx response whose body is not the expected JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A header (usually the credential) cannot be sent over HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
