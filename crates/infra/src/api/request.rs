//! Request descriptor
//!
//! Built by the caller, immutable once handed to the executor, and replayed
//! unchanged on every retry.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use symposium_domain::AuthToken;
use tracing::error;
use url::Url;

use super::errors::ApiError;
use crate::http::PreparedRequest;

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";
const JSON_MEDIA_TYPE: &str = "application/json";

/// One call against the API: method, path under the base URL, query pairs,
/// optional JSON body and extra headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, headers: Vec::new() }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Append a query pair. Values are percent-encoded when the URL is built.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if `body` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|err| ApiError::Transport(format!("failed to serialize body: {err}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Add a header. Replaces a previous header of the same name, including
    /// the default `Content-Type`.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolve against `base` and attach credentials for one attempt.
    pub(crate) fn prepare(
        &self,
        base: &str,
        token: Option<&AuthToken>,
    ) -> Result<PreparedRequest, ApiError> {
        let mut url = Url::parse(&format!("{base}{}", self.path)).map_err(|err| {
            error!(base, path = %self.path, error = %err, "invalid request URL");
            ApiError::Configuration
        })?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_MEDIA_TYPE.to_string())];
        for (name, value) in &self.headers {
            set_header(&mut headers, name, value.clone());
        }
        if let Some(token) = token {
            set_header(&mut headers, AUTHORIZATION, token.bearer());
        }

        let body = self
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|err| ApiError::Transport(format!("failed to encode body: {err}")))?;

        Ok(PreparedRequest { method: self.method.clone(), url: url.into(), headers, body })
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value));
}
