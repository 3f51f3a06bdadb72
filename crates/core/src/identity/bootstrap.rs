//! Records a user in the document store on sign-in

use std::sync::Arc;

use chrono::{DateTime, Utc};
use symposium_domain::{Identity, Result, UserDocument};
use tracing::{debug, error};

use crate::document_store_ports::DocumentStore;

/// What the bootstrap did for one sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// First sign-in: a user document was created.
    Created,
    /// Returning user: `last_login` was refreshed.
    Refreshed,
    /// The store rejected the write. Sign-in proceeds regardless.
    Failed,
}

/// Creates or refreshes the user document when an identity signs in
pub struct IdentityBootstrap {
    store: Arc<dyn DocumentStore>,
}

impl IdentityBootstrap {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Record a sign-in happening now.
    pub async fn on_signed_in(&self, identity: &Identity) -> BootstrapOutcome {
        self.on_signed_in_at(identity, Utc::now()).await
    }

    /// Record a sign-in at `now`. Store failures are logged and swallowed.
    pub async fn on_signed_in_at(&self, identity: &Identity, now: DateTime<Utc>) -> BootstrapOutcome {
        match self.record(identity, now).await {
            Ok(outcome) => {
                debug!(uid = %identity.uid, ?outcome, "user document recorded");
                outcome
            }
            Err(err) => {
                error!(uid = %identity.uid, error = %err, kind = err.label(), "failed to record user document");
                BootstrapOutcome::Failed
            }
        }
    }

    async fn record(&self, identity: &Identity, now: DateTime<Utc>) -> Result<BootstrapOutcome> {
        if self.store.user_document(&identity.uid).await?.is_some() {
            self.store.touch_last_login(&identity.uid, now).await?;
            return Ok(BootstrapOutcome::Refreshed);
        }

        let document = UserDocument {
            uid: identity.uid.clone(),
            name: identity.display_name.clone(),
            email: identity.email.clone(),
            profile_photo: identity.photo_url.clone(),
            created_at: now,
            last_login: now,
        };
        self.store.put_user_document(document).await?;
        Ok(BootstrapOutcome::Created)
    }
}
