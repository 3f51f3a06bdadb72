//! Port interfaces for the identity subsystem
//!
//! The identity subsystem owns sign-in state and issues short-lived bearer
//! tokens. Callers observe state through [`IdentityProvider::status`] or a
//! [`IdentitySubscription`]; dropping the subscription unsubscribes.

use async_trait::async_trait;
use symposium_domain::{AuthToken, Identity, IdentityStatus, Result};
use tokio::sync::watch;

/// Observable identity state plus token issuance
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// State at this instant. May be [`IdentityStatus::Pending`] while a
    /// session is being restored.
    fn status(&self) -> IdentityStatus;

    /// Start observing identity changes.
    fn subscribe(&self) -> IdentitySubscription;

    /// Obtain a bearer token for `identity`. `force_refresh` bypasses any
    /// cached token.
    async fn id_token(&self, identity: &Identity, force_refresh: bool) -> Result<AuthToken>;
}

/// Issues tokens for a signed-in identity (the provider's backend)
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, identity: &Identity, force_refresh: bool) -> Result<AuthToken>;
}

/// Live view on identity state. Dropping it unsubscribes.
#[derive(Debug)]
pub struct IdentitySubscription {
    receiver: watch::Receiver<IdentityStatus>,
}

impl IdentitySubscription {
    pub fn new(receiver: watch::Receiver<IdentityStatus>) -> Self {
        Self { receiver }
    }

    /// Most recently published state.
    pub fn current(&self) -> IdentityStatus {
        self.receiver.borrow().clone()
    }

    /// Resolve with the first settled state, including the current one.
    ///
    /// A provider that goes away before settling reads as signed out.
    pub async fn next_settled(&mut self) -> IdentityStatus {
        match self.receiver.wait_for(IdentityStatus::is_settled).await {
            Ok(status) => (*status).clone(),
            Err(_) => IdentityStatus::SignedOut,
        }
    }

    /// Wait for the next published change, whatever it is.
    ///
    /// Returns `None` once the provider has gone away.
    pub async fn changed(&mut self) -> Option<IdentityStatus> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
