//! In-memory document store
//!
//! Documents are JSON objects grouped in named collections. Registrations
//! live in one collection per listing (`<event_id>_registrations`,
//! `<workshop_id>_registrations`); the parent listing is found by scanning
//! the `events` / `workshops` collections. Queries are field equality only.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use symposium_core::DocumentStore;
use symposium_domain::constants::{
    CONFIRMED_STATUS, EVENTS_COLLECTION, REGISTRATIONS_SUFFIX, USERS_COLLECTION,
    WORKSHOPS_COLLECTION,
};
use symposium_domain::{
    EventRegistration, Result, SymposiumError, UserDocument, WorkshopRegistration,
};
use tracing::{debug, warn};

type Collection = BTreeMap<String, Map<String, Value>>;

/// Collection name holding the registrations of one listing.
pub fn registrations_collection(parent_id: &str) -> String {
    format!("{parent_id}{REGISTRATIONS_SUFFIX}")
}

#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace `collection/id`. The value must serialize to an
    /// object.
    pub fn insert<T: Serialize>(&self, collection: &str, id: &str, document: &T) -> Result<()> {
        let value = serde_json::to_value(document)
            .map_err(|err| SymposiumError::Storage(format!("document {collection}/{id}: {err}")))?;
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(SymposiumError::InvalidInput(format!(
                    "document {collection}/{id} is not an object: {other}"
                )))
            }
        };
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    pub fn get(&self, collection: &str, id: &str) -> Option<Map<String, Value>> {
        self.collections.read().get(collection).and_then(|docs| docs.get(id)).cloned()
    }

    /// Documents of `collection` whose fields equal every `(field, value)`
    /// pair, as `(id, fields)` in id order.
    pub fn query(&self, collection: &str, filters: &[(&str, &str)]) -> Vec<(String, Map<String, Value>)> {
        let collections = self.collections.read();
        let Some(docs) = collections.get(collection) else {
            return Vec::new();
        };
        docs.iter()
            .filter(|(_, fields)| {
                filters.iter().all(|(field, expected)| {
                    fields.get(*field).and_then(Value::as_str) == Some(*expected)
                })
            })
            .map(|(id, fields)| (id.clone(), fields.clone()))
            .collect()
    }

    /// Number of documents in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections.read().get(collection).map_or(0, BTreeMap::len)
    }

    /// Registrations matching `filters` across every listing of `parents`,
    /// with the listing id and title merged into each document.
    fn registrations_across<T: DeserializeOwned>(
        &self,
        parents: &str,
        id_field: &str,
        name_field: &str,
        filters: &[(&str, &str)],
    ) -> Vec<T> {
        let listings = self.query(parents, &[]);
        let mut found = Vec::new();

        for (listing_id, listing) in listings {
            let title = listing
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(listing_id.as_str())
                .to_string();

            for (registration_id, mut fields) in
                self.query(&registrations_collection(&listing_id), filters)
            {
                fields.insert("registration_id".into(), Value::String(registration_id.clone()));
                fields.insert(id_field.into(), Value::String(listing_id.clone()));
                fields.entry(name_field.to_string()).or_insert(Value::String(title.clone()));

                match serde_json::from_value(Value::Object(fields)) {
                    Ok(registration) => found.push(registration),
                    Err(err) => {
                        warn!(listing = %listing_id, %registration_id, error = %err, "skipping malformed registration");
                    }
                }
            }
        }
        found
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn event_registrations_by_leader_email(
        &self,
        email: &str,
    ) -> Result<Vec<EventRegistration>> {
        let found = self.registrations_across(
            EVENTS_COLLECTION,
            "event_id",
            "event_name",
            &[("leader_email", email)],
        );
        debug!(count = found.len(), "event registrations from store");
        Ok(found)
    }

    async fn workshop_registrations_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<WorkshopRegistration>> {
        let found = self.registrations_across(
            WORKSHOPS_COLLECTION,
            "workshop_id",
            "workshop_name",
            &[("email", email), ("status", CONFIRMED_STATUS)],
        );
        debug!(count = found.len(), "workshop registrations from store");
        Ok(found)
    }

    async fn user_document(&self, uid: &str) -> Result<Option<UserDocument>> {
        self.get(USERS_COLLECTION, uid)
            .map(|fields| serde_json::from_value(Value::Object(fields)))
            .transpose()
            .map_err(|err| SymposiumError::Storage(format!("user document {uid}: {err}")))
    }

    async fn put_user_document(&self, document: UserDocument) -> Result<()> {
        let uid = document.uid.clone();
        self.insert(USERS_COLLECTION, &uid, &document)
    }

    async fn touch_last_login(&self, uid: &str, at: DateTime<Utc>) -> Result<()> {
        let mut collections = self.collections.write();
        let fields = collections
            .get_mut(USERS_COLLECTION)
            .and_then(|users| users.get_mut(uid))
            .ok_or_else(|| SymposiumError::NotFound(format!("user {uid}")))?;
        let stamp = serde_json::to_value(at)
            .map_err(|err| SymposiumError::Storage(format!("user {uid}: {err}")))?;
        fields.insert("last_login".into(), stamp);
        Ok(())
    }
}
