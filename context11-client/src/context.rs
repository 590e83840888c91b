//! Per-invocation API context.

use secrecy::{ExposeSecret, SecretString};

/// Production API host used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://context11.com";

/// Credential and base URL used for one tool invocation.
///
/// The stdio transport builds one context at startup; the HTTP transport
/// builds one per request from the caller's header. The credential is kept
/// behind [`SecretString`] and never shows up in `Debug` output.
#[derive(Clone)]
pub struct ApiContext {
    credential: SecretString,
    base_url: String,
}

impl ApiContext {
    pub fn new(credential: impl Into<String>, base_url: impl Into<String>) -> Self {
        let credential: String = credential.into();
        Self {
            credential: SecretString::new(credential.into()),
            base_url: base_url.into(),
        }
    }

    /// Context against the production host.
    pub fn with_default_url(credential: impl Into<String>) -> Self {
        Self::new(credential, DEFAULT_API_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full target URL. The endpoint is appended verbatim, so it must start
    /// with `/`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.credential.expose_secret())
    }
}

impl std::fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiContext")
            .field("credential", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_plain_concatenation() {
        let ctx = ApiContext::new("key", "https://kb.example.com/");
        assert_eq!(
            ctx.url("/api/mcp/folders"),
            "https://kb.example.com//api/mcp/folders"
        );
    }

    #[test]
    fn test_debug_redacts_credential() {
        let ctx = ApiContext::with_default_url("super-secret");
        let debug = format!("{:?}", ctx);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains(DEFAULT_API_URL));
    }

    #[test]
    fn test_bearer_value() {
        let ctx = ApiContext::new("abc", DEFAULT_API_URL);
        assert_eq!(ctx.bearer(), "Bearer abc");
    }
}
