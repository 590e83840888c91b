//! Request Client: authenticated JSON calls against the knowledge base.

use crate::context::ApiContext;
use crate::error::{ClientError, ClientResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;

/// One outbound call: method, endpoint path, optional JSON body and any
/// extra headers.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    endpoint: String,
    body: Option<serde_json::Value>,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header. Extra headers replace the defaults of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// HTTP client for the knowledge base REST API.
///
/// Holds no per-caller state: credential and base URL arrive with every
/// call through [`ApiContext`]. No timeout and no retries are configured.
#[derive(Debug, Clone)]
pub struct RequestClient {
    http: reqwest::Client,
}

impl RequestClient {
    pub fn new() -> ClientResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http })
    }

    pub fn from_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Issue `request` against `ctx` and decode the JSON response as `T`.
    ///
    /// Non-2xx responses fail with [`ClientError::Api`] carrying the raw
    /// body text; a 2xx body that does not decode fails with
    /// [`ClientError::Parse`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        ctx: &ApiContext,
        request: ApiRequest,
    ) -> ClientResult<T> {
        let headers = build_headers(ctx, &request.headers)?;
        let url = ctx.url(&request.endpoint);

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        tracing::debug!(
            method = %request.method,
            endpoint = %request.endpoint,
            "Knowledge base request"
        );

        let response = builder.send().await?;
        self.parse_response(&request, response).await
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(
                method = %request.method,
                endpoint = %request.endpoint,
                status = status.as_u16(),
                "Knowledge base request failed"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(
            endpoint = %request.endpoint,
            status = status.as_u16(),
            "Knowledge base response"
        );
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn build_headers(ctx: &ApiContext, extra: &[(String, String)]) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&ctx.bearer())
            .map_err(|_| ClientError::InvalidHeader("authorization".to_string()))?,
    );

    for (name, value) in extra {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}
