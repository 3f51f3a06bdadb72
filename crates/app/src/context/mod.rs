//! Application context - dependency injection container
//!
//! Built once at start-up and passed by reference to every command. Holds
//! the single [`ApiClient`] and the services wired over it.

use std::sync::Arc;

use serde::Serialize;
use symposium_core::{
    BootstrapOutcome, DocumentStore, IdentityBootstrap, IdentityProvider, ProfileService,
    RegistrationService, SymposiumApi,
};
use symposium_domain::{AppConfig, Identity, IdentityStatus, Result};
use symposium_infra::api::AccessTokenProvider;
use symposium_infra::{ApiClient, ApiClientConfig, ApiCommands, IdentityTokenProvider};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::utils::logging::init_logging;

/// Identity state as reported to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityState {
    Unavailable,
    Pending,
    SignedOut,
    SignedIn,
}

/// Reachability summary for status displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub api_reachable: bool,
    pub identity: IdentityState,
    /// Human-readable reason when the API is not usable.
    pub message: Option<String>,
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: AppConfig,
    client: Arc<ApiClient>,
    api: Arc<dyn SymposiumApi>,
    identity: Option<Arc<dyn IdentityProvider>>,
    pub registrations: RegistrationService,
    pub profiles: ProfileService,
    pub bootstrap: Arc<IdentityBootstrap>,
}

impl AppContext {
    /// Wire the context from `config`.
    ///
    /// Without an identity provider every request goes out unauthenticated.
    ///
    /// # Errors
    /// Returns `SymposiumError::Internal` if the HTTP client cannot be built.
    /// A missing API endpoint is not an error here; it is reported by the
    /// first request.
    pub fn new(
        config: AppConfig,
        identity: Option<Arc<dyn IdentityProvider>>,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self> {
        let auth: Arc<dyn AccessTokenProvider> = match &identity {
            Some(provider) => Arc::new(IdentityTokenProvider::new(
                Arc::clone(provider),
                config.api.token_wait_timeout(),
            )),
            None => Arc::new(IdentityTokenProvider::unconfigured()),
        };

        let client = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api), auth)?);
        let api: Arc<dyn SymposiumApi> = Arc::new(ApiCommands::new(Arc::clone(&client)));

        if config.api.endpoint().is_none() {
            warn!("API base URL is not configured; requests will fail");
        }
        info!(
            endpoint = config.api.endpoint().unwrap_or("<unset>"),
            identity = identity.is_some(),
            max_attempts = config.api.retry.max_attempts,
            "application context ready"
        );

        Ok(Self {
            registrations: RegistrationService::new(Arc::clone(&api)),
            profiles: ProfileService::new(Arc::clone(&api), Arc::clone(&store)),
            bootstrap: Arc::new(IdentityBootstrap::new(store)),
            config,
            client,
            api,
            identity,
        })
    }

    /// Load configuration from the environment or a config file, install
    /// logging, then wire the context.
    ///
    /// # Errors
    /// Returns `SymposiumError::Config` for malformed configuration.
    pub fn from_environment(
        identity: Option<Arc<dyn IdentityProvider>>,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self> {
        let config = symposium_infra::config::load()?;
        if !init_logging(&config.logging) {
            debug!("tracing subscriber already installed");
        }
        Self::new(config, identity, store)
    }

    pub fn api(&self) -> &dyn SymposiumApi {
        self.api.as_ref()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn identity_status(&self) -> Option<IdentityStatus> {
        self.identity.as_ref().map(|provider| provider.status())
    }

    /// Signed-in identity, if any.
    pub fn signed_in(&self) -> Option<Identity> {
        self.identity_status().and_then(|status| status.identity().cloned())
    }

    /// Run identity bootstrap for the current sign-in and every later one,
    /// until the provider goes away. `None` without a provider.
    pub fn spawn_identity_listener(&self) -> Option<JoinHandle<()>> {
        let mut subscription = self.identity.as_ref()?.subscribe();
        let bootstrap = Arc::clone(&self.bootstrap);

        Some(tokio::spawn(async move {
            let mut last_uid: Option<String> = None;
            let mut next = Some(subscription.current());

            while let Some(status) = next {
                match status {
                    IdentityStatus::SignedIn(identity)
                        if last_uid.as_deref() != Some(identity.uid.as_str()) =>
                    {
                        let outcome = bootstrap.on_signed_in(&identity).await;
                        debug!(uid = %identity.uid, ?outcome, "identity bootstrap finished");
                        last_uid = Some(identity.uid);
                    }
                    IdentityStatus::SignedOut => last_uid = None,
                    IdentityStatus::SignedIn(_) | IdentityStatus::Pending => {}
                }
                next = subscription.changed().await;
            }
            debug!("identity provider closed, listener stopped");
        }))
    }

    /// Record a sign-in reported by the host. Other states are no-ops.
    pub async fn on_identity_change(&self, status: &IdentityStatus) -> Option<BootstrapOutcome> {
        match status {
            IdentityStatus::SignedIn(identity) => Some(self.bootstrap.on_signed_in(identity).await),
            IdentityStatus::SignedOut | IdentityStatus::Pending => None,
        }
    }

    /// Probe the API once and report identity state.
    pub async fn health_check(&self) -> HealthStatus {
        let identity = match self.identity_status() {
            None => IdentityState::Unavailable,
            Some(IdentityStatus::Pending) => IdentityState::Pending,
            Some(IdentityStatus::SignedOut) => IdentityState::SignedOut,
            Some(IdentityStatus::SignedIn(_)) => IdentityState::SignedIn,
        };

        let (api_reachable, message) = match self.client.health_check().await {
            Ok(true) => (true, None),
            Ok(false) => (false, Some("API did not report healthy".to_string())),
            Err(err) => (false, Some(err.to_string())),
        };

        HealthStatus { api_reachable, identity, message }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("identity", &self.identity.is_some())
            .finish_non_exhaustive()
    }
}
