//! Request executor
//!
//! Resolves a token, builds the request, sends it, and classifies the
//! outcome. Only transport failures (the server could not be reached) are
//! retried, following a fixed backoff schedule; any HTTP response ends the
//! call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use symposium_common::{BackoffSchedule, Sleeper, TokioSleeper};
use symposium_domain::{ApiConfig, AuthToken};
use tracing::{debug, error, info, instrument, warn};

use super::auth::{AccessTokenProvider, IdentityTokenProvider};
use super::errors::ApiError;
use super::request::ApiRequest;
use crate::http::{HttpClient, HttpTransport, TransportError, TransportResponse};

/// `User-Agent` sent by the reqwest transport.
pub const USER_AGENT: &str = concat!("symposium-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL (e.g. "https://api.example.org"). `None` fails every call
    /// with [`ApiError::Configuration`].
    pub base_url: Option<String>,
    /// Timeout applied by the transport to each attempt
    pub timeout: Duration,
    /// Attempt budget and waits between attempts
    pub retry: BackoffSchedule,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.endpoint().map(str::to_string),
            timeout: config.request_timeout(),
            retry: BackoffSchedule::from_millis(config.retry.max_attempts, &config.retry.delays_ms),
        }
    }
}

impl ApiClientConfig {
    fn endpoint(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
    }
}

/// Per-call retry bookkeeping. Created at call start, dropped on the
/// terminal outcome.
struct RetryState<'a> {
    attempt: u32,
    schedule: &'a BackoffSchedule,
}

impl<'a> RetryState<'a> {
    fn new(schedule: &'a BackoffSchedule) -> Self {
        Self { attempt: 0, schedule }
    }

    fn begin_attempt(&mut self) -> u32 {
        self.attempt += 1;
        self.attempt
    }

    /// Wait before the next attempt, or `None` once the budget is spent.
    fn next_delay(&self) -> Option<Duration> {
        self.schedule
            .allows_another(self.attempt)
            .then(|| self.schedule.delay_before_retry(self.attempt))
    }
}

/// API client with token resolution and transport-failure retry
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AccessTokenProvider>,
    sleeper: Arc<dyn Sleeper>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client backed by reqwest
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self::with_transport(config, auth, Arc::new(http_client), Arc::new(TokioSleeper)))
    }

    /// Create a client over an explicit transport and sleeper.
    pub fn with_transport(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
        transport: Arc<dyn HttpTransport>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self { transport, auth, sleeper, config }
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Active configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Execute `request` and decode the response body as `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Configuration`] if no base URL is configured (no
    ///   network call is made)
    /// - [`ApiError::Connectivity`] once every attempt failed to reach the
    ///   server
    /// - [`ApiError::Api`] for any non-success status (never retried)
    /// - [`ApiError::Decode`] if a success body does not match `T`
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub async fn request<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        let base = self.config.endpoint().ok_or_else(|| {
            error!("API base URL is not configured");
            ApiError::Configuration
        })?;

        let mut retry = RetryState::new(&self.config.retry);
        loop {
            let attempt = retry.begin_attempt();

            // Re-resolved per attempt: a retry may span a token expiry.
            let token = self.resolve_token().await;
            let prepared = request.prepare(base, token.as_ref())?;

            debug!(
                attempt,
                max_attempts = self.config.retry.max_attempts(),
                url = %prepared.url_for_log(),
                authenticated = token.is_some(),
                "sending API request"
            );

            match self.transport.send(&prepared).await {
                Ok(response) => return Self::decode(response),
                Err(TransportError::Build(reason)) => {
                    error!(%reason, "request could not be built");
                    return Err(ApiError::Transport(reason));
                }
                // The server already answered; resending could duplicate a submission.
                Err(TransportError::Body { status, reason }) => {
                    error!(%status, %reason, "response body could not be read");
                    return Err(Self::unreadable_body(status, reason));
                }
                Err(TransportError::Unreachable(reason)) => match retry.next_delay() {
                    Some(delay) => {
                        warn!(
                            attempt,
                            max_attempts = self.config.retry.max_attempts(),
                            delay_ms = delay.as_millis() as u64,
                            %reason,
                            "server unreachable, retrying"
                        );
                        self.sleeper.sleep(delay).await;
                    }
                    None => {
                        error!(attempts = attempt, %reason, "server unreachable, giving up");
                        return Err(ApiError::Connectivity { attempts: attempt });
                    }
                },
            }
        }
    }

    /// Execute a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(&ApiRequest::get(path)).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.request(&ApiRequest::post(path).json(body)?).await
    }

    /// Execute a PUT request with a JSON body
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.request(&ApiRequest::put(path).json(body)?).await
    }

    /// Health check for API
    ///
    /// Single unauthenticated `GET /health`, no retry.
    ///
    /// # Returns
    ///
    /// `true` if the API answered with a success status, `false` if it
    /// answered otherwise or could not be reached
    ///
    /// # Errors
    ///
    /// Returns error if no base URL is configured or the request cannot be
    /// built
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let base = self.config.endpoint().ok_or(ApiError::Configuration)?;
        let prepared = ApiRequest::get("/health").prepare(base, None)?;

        match self.transport.send(&prepared).await {
            Ok(response) if response.status.is_success() => {
                info!("API is healthy");
                Ok(true)
            }
            Ok(response) => {
                warn!(status = %response.status, "API returned non-success status");
                Ok(false)
            }
            Err(TransportError::Unreachable(reason)) => {
                warn!(%reason, "Health check failed");
                Ok(false)
            }
            Err(TransportError::Body { status, reason }) => {
                warn!(%status, %reason, "Health check body could not be read");
                Ok(status.is_success())
            }
            Err(TransportError::Build(reason)) => Err(ApiError::Transport(reason)),
        }
    }

    async fn resolve_token(&self) -> Option<AuthToken> {
        self.auth.access_token().await.ok()
    }

    /// Error for a response whose status arrived but whose body did not.
    fn unreadable_body(status: StatusCode, reason: String) -> ApiError {
        if status.is_success() {
            ApiError::Decode(reason)
        } else {
            ApiError::rejected(status, &[])
        }
    }

    fn decode<T: DeserializeOwned>(response: TransportResponse) -> Result<T, ApiError> {
        let status = response.status;
        if !status.is_success() {
            let err = ApiError::rejected(status, &response.body);
            warn!(%status, message = %err, "API rejected request");
            return Err(err);
        }

        // 204/205 have no body by RFC; empty bodies decode as null
        let empty = status == StatusCode::NO_CONTENT
            || status == StatusCode::RESET_CONTENT
            || response.body.iter().all(u8::is_ascii_whitespace);
        let decoded = if empty {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_slice(&response.body)
        };

        decoded.map_err(|e| {
            error!(%status, error = %e, "failed to decode response");
            ApiError::Decode(e.to_string())
        })
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
    transport: Option<Arc<dyn HttpTransport>>,
    sleeper: Option<Arc<dyn Sleeper>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the authentication provider. Without one, requests go out
    /// unauthenticated.
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Replace the reqwest transport
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the tokio sleeper used between retries
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the default HTTP client cannot be created
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth = self.auth.unwrap_or_else(|| Arc::new(IdentityTokenProvider::unconfigured()));
        let sleeper = self.sleeper.unwrap_or_else(|| Arc::new(TokioSleeper));

        match self.transport {
            Some(transport) => Ok(ApiClient::with_transport(config, auth, transport, sleeper)),
            None => {
                let client = ApiClient::new(config, auth)?;
                Ok(ApiClient { sleeper, ..client })
            }
        }
    }
}
