use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use symposium_domain::SymposiumError;
use thiserror::Error;
use tracing::debug;

use crate::errors::InfraError;

/// Fully resolved request, ready to hand to a transport.
///
/// Replayed as-is on every retry, so the body is kept as bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl PreparedRequest {
    /// URL without its query string, for logging.
    pub fn url_for_log(&self) -> &str {
        self.url.split_once('?').map_or(self.url.as_str(), |(base, _)| base)
    }

    /// First header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a received response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Failure to obtain a complete HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The host could not be reached (connect, timeout, send).
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// A status line arrived but the body could not be read. The server has
    /// already seen the request.
    #[error("response body from {status} could not be read: {reason}")]
    Body { status: StatusCode, reason: String },

    /// The request could not be constructed (bad URL, header or body).
    #[error("invalid request: {0}")]
    Build(String),
}

/// Sends one request and reports the raw outcome. Implementations never
/// retry; retry policy belongs to the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &PreparedRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: &PreparedRequest) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}

/// reqwest-backed transport with a per-request timeout.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, SymposiumError> {
        Self::builder().build()
    }

    fn headers(request: &PreparedRequest) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::with_capacity(request.headers.len());
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| TransportError::Build(format!("header name {name:?}: {err}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|err| TransportError::Build(format!("header value for {name}: {err}")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn send(&self, request: &PreparedRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(Self::headers(request)?);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let method = &request.method;
        let url = request.url_for_log();
        debug!(%method, %url, "sending HTTP request");

        // reqwest errors print the full URL, query included
        let response = builder.send().await.map_err(|err| {
            let err = err.without_url();
            debug!(%method, %url, error = %err, "HTTP request failed");
            TransportError::from(err)
        })?;

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        let body = response.bytes().await.map_err(|err| {
            let err = err.without_url();
            debug!(%method, %url, %status, error = %err, "HTTP response body failed");
            TransportError::Body { status, reason: err.to_string() }
        })?;
        Ok(TransportResponse { status, body: body.to_vec() })
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30), user_agent: None }
    }
}

impl HttpClientBuilder {
    /// Per-request timeout, connect through body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` header sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the reqwest client. System proxy settings apply.
    pub fn build(self) -> Result<HttpClient, SymposiumError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout);

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            SymposiumError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
