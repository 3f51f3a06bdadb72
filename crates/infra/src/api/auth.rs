//! Bearer token resolution
//!
//! Token resolution never fails a request: when no token can be obtained
//! the request proceeds without an `Authorization` header and the server
//! decides.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use symposium_core::IdentityProvider;
use symposium_domain::constants::DEFAULT_TOKEN_WAIT_TIMEOUT_MS;
use symposium_domain::{AuthToken, Identity, IdentityStatus};
use thiserror::Error;
use tracing::{debug, warn};

/// Why no token is attached to a request. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthUnavailable {
    #[error("no identity provider configured")]
    NotConfigured,

    #[error("no signed-in identity")]
    NoIdentity,

    #[error("identity did not settle within {0:?}")]
    TimedOut(Duration),

    #[error("token fetch failed: {0}")]
    TokenFetch(String),
}

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Resolve a fresh token for the current identity.
    async fn access_token(&self) -> Result<AuthToken, AuthUnavailable>;
}

/// Always returns the same token. Useful for service accounts and tests.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: AuthToken,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: AuthToken::new(token) }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<AuthToken, AuthUnavailable> {
        Ok(self.token.clone())
    }
}

/// Resolves tokens from the identity subsystem.
///
/// If identity resolution is still pending, waits for the first settled
/// state up to `wait_timeout`. The subscription taken for that wait is
/// released on every path.
pub struct IdentityTokenProvider {
    identity: Option<Arc<dyn IdentityProvider>>,
    wait_timeout: Duration,
}

impl IdentityTokenProvider {
    pub fn new(identity: Arc<dyn IdentityProvider>, wait_timeout: Duration) -> Self {
        Self { identity: Some(identity), wait_timeout }
    }

    /// Provider for builds without an identity subsystem: every request
    /// goes out unauthenticated.
    pub fn unconfigured() -> Self {
        Self { identity: None, wait_timeout: Duration::from_millis(DEFAULT_TOKEN_WAIT_TIMEOUT_MS) }
    }

    pub fn wait_timeout(&self) -> Duration {
        self.wait_timeout
    }

    async fn settled_identity(
        &self,
        provider: &dyn IdentityProvider,
    ) -> Result<Identity, AuthUnavailable> {
        match provider.status() {
            IdentityStatus::SignedIn(identity) => return Ok(identity),
            IdentityStatus::SignedOut => return Err(AuthUnavailable::NoIdentity),
            IdentityStatus::Pending => {}
        }

        debug!(timeout_ms = self.wait_timeout.as_millis() as u64, "waiting for identity to settle");
        let mut subscription = provider.subscribe();
        let outcome = tokio::time::timeout(self.wait_timeout, subscription.next_settled()).await;
        drop(subscription);

        match outcome {
            Ok(IdentityStatus::SignedIn(identity)) => Ok(identity),
            Ok(_) => Err(AuthUnavailable::NoIdentity),
            Err(_) => Err(AuthUnavailable::TimedOut(self.wait_timeout)),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for IdentityTokenProvider {
    async fn access_token(&self) -> Result<AuthToken, AuthUnavailable> {
        let provider = self.identity.as_deref().ok_or(AuthUnavailable::NotConfigured)?;

        let identity = self.settled_identity(provider).await.inspect_err(|reason| {
            if matches!(reason, AuthUnavailable::TimedOut(_)) {
                warn!(%reason, "identity wait timed out, proceeding unauthenticated");
            } else {
                debug!(%reason, "no identity, proceeding unauthenticated");
            }
        })?;

        // Always forced: a retry may straddle a token expiry.
        let token = provider.id_token(&identity, true).await.map_err(|err| {
            warn!(uid = %identity.uid, error = %err, "token fetch failed, proceeding unauthenticated");
            AuthUnavailable::TokenFetch(err.to_string())
        })?;

        debug!(uid = %identity.uid, token_len = token.len(), "token resolved");
        Ok(token)
    }
}
