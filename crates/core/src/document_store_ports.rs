//! Port interface for the document store
//!
//! The store is a secondary source: profile loading falls back to it when
//! the API is unavailable, and identity bootstrap records users in it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use symposium_domain::{EventRegistration, Result, UserDocument, WorkshopRegistration};

/// Document store queries and writes used by the client
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Event registrations led by `email`, across every event.
    async fn event_registrations_by_leader_email(
        &self,
        email: &str,
    ) -> Result<Vec<EventRegistration>>;

    /// Confirmed workshop registrations for `email`.
    async fn workshop_registrations_by_email(&self, email: &str)
        -> Result<Vec<WorkshopRegistration>>;

    async fn user_document(&self, uid: &str) -> Result<Option<UserDocument>>;

    /// Create or replace the user document keyed by `document.uid`.
    async fn put_user_document(&self, document: UserDocument) -> Result<()>;

    /// Merge a new `last_login` into an existing user document.
    async fn touch_last_login(&self, uid: &str, at: DateTime<Utc>) -> Result<()>;
}
