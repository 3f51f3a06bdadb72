//! Profile loading with document-store fallback
//!
//! The API is the primary source. If any of the three profile calls fails,
//! the registrations are read from the document store by email instead and
//! the profile itself is left empty.

use std::sync::Arc;

use serde::Serialize;
use symposium_domain::{EventRegistration, Result, User, WorkshopRegistration};
use tracing::{error, warn};

use crate::api_ports::SymposiumApi;
use crate::document_store_ports::DocumentStore;

/// Where a snapshot's data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    Api,
    DocumentStore,
}

/// Profile page contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSnapshot {
    pub profile: Option<User>,
    pub events: Vec<EventRegistration>,
    pub workshops: Vec<WorkshopRegistration>,
    pub source: ProfileSource,
}

pub struct ProfileService {
    api: Arc<dyn SymposiumApi>,
    store: Arc<dyn DocumentStore>,
}

impl ProfileService {
    pub fn new(api: Arc<dyn SymposiumApi>, store: Arc<dyn DocumentStore>) -> Self {
        Self { api, store }
    }

    /// Load the profile of the user signed in as `email`.
    pub async fn load(&self, email: &str) -> ProfileSnapshot {
        match self.load_from_api().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, kind = err.label(), "profile API unavailable, falling back to document store");
                self.load_from_store(email).await
            }
        }
    }

    async fn load_from_api(&self) -> Result<ProfileSnapshot> {
        let (profile, events, workshops) =
            tokio::try_join!(self.api.user_profile(), self.api.user_events(), self.api.user_workshops())?;
        Ok(ProfileSnapshot { profile: Some(profile), events, workshops, source: ProfileSource::Api })
    }

    async fn load_from_store(&self, email: &str) -> ProfileSnapshot {
        let (events, workshops) = tokio::join!(
            self.store.event_registrations_by_leader_email(email),
            self.store.workshop_registrations_by_email(email),
        );

        let events = events.unwrap_or_else(|err| {
            error!(error = %err, "failed to read event registrations from document store");
            Vec::new()
        });
        let workshops = workshops.unwrap_or_else(|err| {
            error!(error = %err, "failed to read workshop registrations from document store");
            Vec::new()
        });

        ProfileSnapshot { profile: None, events, workshops, source: ProfileSource::DocumentStore }
    }
}
