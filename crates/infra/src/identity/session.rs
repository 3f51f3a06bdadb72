//! Identity session backed by a `tokio::sync::watch` channel
//!
//! The session starts [`IdentityStatus::Pending`] until the host reports
//! the outcome of restoring a previous sign-in. Tokens are delegated to a
//! [`TokenIssuer`].

use std::sync::Arc;

use async_trait::async_trait;
use symposium_core::{IdentityProvider, IdentitySubscription, TokenIssuer};
use symposium_domain::{AuthToken, Identity, IdentityStatus, Result, SymposiumError};
use tokio::sync::watch;
use tracing::info;

pub struct SessionIdentity {
    state: watch::Sender<IdentityStatus>,
    issuer: Arc<dyn TokenIssuer>,
}

impl SessionIdentity {
    /// New session, still resolving.
    pub fn new(issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { state: watch::Sender::new(IdentityStatus::Pending), issuer }
    }

    pub fn sign_in(&self, identity: Identity) {
        info!(uid = %identity.uid, "identity signed in");
        self.state.send_replace(IdentityStatus::SignedIn(identity));
    }

    pub fn sign_out(&self) {
        info!("identity signed out");
        self.state.send_replace(IdentityStatus::SignedOut);
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.state.receiver_count()
    }
}

#[async_trait]
impl IdentityProvider for SessionIdentity {
    fn status(&self) -> IdentityStatus {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> IdentitySubscription {
        IdentitySubscription::new(self.state.subscribe())
    }

    async fn id_token(&self, identity: &Identity, force_refresh: bool) -> Result<AuthToken> {
        let current = self.state.borrow().identity().map(|current| current.uid.clone());
        if current.as_deref() != Some(identity.uid.as_str()) {
            return Err(SymposiumError::Auth(format!("{} is not signed in", identity.uid)));
        }
        self.issuer.issue(identity, force_refresh).await
    }
}
