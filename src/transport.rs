//! HTTP transport used by [`AddressClient`](crate::client::AddressClient).
//!
//! The client prepares a fully signed [`ApiRequest`] and hands it to an
//! [`HttpTransport`], which performs the exchange and decodes the JSON body.
//! Timeouts, TLS and connection reuse are the transport's concern.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::error::TransportError;
use crate::params::ParameterSet;

/// Header carrying the API token.
pub const API_TOKEN_HEADER: &str = "X-Api-Token";

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request ready to be sent.
#[derive(Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the base URL.
    pub path: String,
    /// Absolute request URL.
    pub url: Url,
    /// Value of the `X-Api-Token` header.
    pub api_token: String,
    /// Form body, including `sign` for signed operations.
    pub body: ParameterSet,
}

impl ApiRequest {
    /// Whether the body carries a signature.
    pub fn is_signed(&self) -> bool {
        self.body.contains_key(crate::auth::SIGN_PARAM)
    }
}

impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("api_token", &"[REDACTED]")
            .field("body", &self.body)
            .finish()
    }
}

/// Performs a single HTTP exchange and decodes the JSON response.
///
/// Implementations must not retry: every call maps to at most one request.
pub trait HttpTransport: Send + Sync {
    /// Send `request` and decode the response body.
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send;
}

/// Default transport backed by `reqwest` with tracing middleware.
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Create a transport with default settings.
    pub fn new() -> Self {
        Self::with_options(None, None)
    }

    /// Create a transport with a custom user agent and request timeout.
    pub fn with_options(user_agent: Option<String>, timeout: Option<Duration>) -> Self {
        let mut headers = HeaderMap::new();
        let user_agent = user_agent
            .unwrap_or_else(|| format!("address-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("address-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self { http_client }
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<serde_json::Value, TransportError> {
        let mut builder = self
            .http_client
            .request(request.method.into(), request.url)
            .header(API_TOKEN_HEADER, request.api_token);

        if !request.body.is_empty() {
            builder = builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(request.body.to_query_string());
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("{} {} returned HTTP {}", request.method, request.path, status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
