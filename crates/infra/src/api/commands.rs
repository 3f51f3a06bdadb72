//! Typed endpoint surface
//!
//! Every call goes through [`ApiClient::request`]. Listing calls degrade to
//! an empty list; everything else surfaces the executor's error.

use std::sync::Arc;

use async_trait::async_trait;
use symposium_core::SymposiumApi;
use symposium_domain::{
    Event, EventRegistration, EventRegistrationReceipt, EventRegistrationRequest, ListingStatus,
    RegistrationCheck, Result, TeamNameAvailability, User, UserUpdate, Workshop,
    WorkshopRegistration, WorkshopRegistrationReceipt, WorkshopRegistrationRequest,
};
use tracing::{debug, instrument, warn};
use urlencoding::encode;

use super::client::ApiClient;
use super::request::ApiRequest;

/// API commands for the symposium backend
pub struct ApiCommands {
    client: Arc<ApiClient>,
}

impl ApiCommands {
    /// Create a new commands instance
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn listing(path: &str, status: Option<ListingStatus>) -> ApiRequest {
        let request = ApiRequest::get(path);
        match status {
            Some(status) => request.query("status", status.as_query()),
            None => request,
        }
    }
}

#[async_trait]
impl SymposiumApi for ApiCommands {
    // === Events ===

    #[instrument(skip(self))]
    async fn events(&self, status: Option<ListingStatus>) -> Vec<Event> {
        match self.client.request(&Self::listing("/api/events", status)).await {
            Ok(events) => events,
            Err(err) => {
                warn!(error = %err, "Failed to fetch events, using empty list");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    async fn event(&self, event_id: &str) -> Result<Event> {
        let path = format!("/api/events/{}", encode(event_id));
        Ok(self.client.get(&path).await?)
    }

    #[instrument(skip(self, request), fields(team_name = %request.team_name))]
    async fn register_for_event(
        &self,
        event_id: &str,
        request: &EventRegistrationRequest,
    ) -> Result<EventRegistrationReceipt> {
        let path = format!("/api/events/{}/register", encode(event_id));
        let receipt: EventRegistrationReceipt = self.client.post(&path, request).await?;

        debug!(registration_id = %receipt.registration_id, "Event registration created");
        Ok(receipt)
    }

    #[instrument(skip(self))]
    async fn check_team_name(&self, event_id: &str, team_name: &str) -> Result<TeamNameAvailability> {
        let path = format!("/api/events/{}/check-team-name", encode(event_id));
        Ok(self.client.request(&ApiRequest::get(path).query("team_name", team_name)).await?)
    }

    #[instrument(skip(self))]
    async fn check_event_registration(&self, event_id: &str) -> Result<RegistrationCheck> {
        let path = format!("/api/events/{}/check-registration", encode(event_id));
        Ok(self.client.get(&path).await?)
    }

    // === Workshops ===

    #[instrument(skip(self))]
    async fn workshops(&self, status: Option<ListingStatus>) -> Vec<Workshop> {
        match self.client.request(&Self::listing("/api/workshops", status)).await {
            Ok(workshops) => workshops,
            Err(err) => {
                warn!(error = %err, "Failed to fetch workshops, using empty list");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    async fn workshop(&self, workshop_id: &str) -> Result<Workshop> {
        let path = format!("/api/workshops/{}", encode(workshop_id));
        Ok(self.client.get(&path).await?)
    }

    #[instrument(skip(self, request))]
    async fn register_workshop(
        &self,
        workshop_id: &str,
        request: &WorkshopRegistrationRequest,
    ) -> Result<WorkshopRegistrationReceipt> {
        let path = format!("/api/workshops/{}/register", encode(workshop_id));
        let receipt: WorkshopRegistrationReceipt = self.client.post(&path, request).await?;

        debug!(registration_id = %receipt.registration_id, "Workshop registration created");
        Ok(receipt)
    }

    #[instrument(skip(self, email))]
    async fn check_workshop_email(&self, workshop_id: &str, email: &str) -> Result<RegistrationCheck> {
        let path = format!("/api/workshops/{}/check-email", encode(workshop_id));
        Ok(self.client.request(&ApiRequest::get(path).query("email", email)).await?)
    }

    #[instrument(skip(self))]
    async fn check_workshop_registration(&self, workshop_id: &str) -> Result<RegistrationCheck> {
        let path = format!("/api/workshops/{}/check-registration", encode(workshop_id));
        Ok(self.client.get(&path).await?)
    }

    // === User ===

    #[instrument(skip(self))]
    async fn user_profile(&self) -> Result<User> {
        Ok(self.client.get("/api/user/profile").await?)
    }

    #[instrument(skip(self, update))]
    async fn update_user_profile(&self, update: &UserUpdate) -> Result<User> {
        Ok(self.client.put("/api/user/profile", update).await?)
    }

    #[instrument(skip(self))]
    async fn user_events(&self) -> Result<Vec<EventRegistration>> {
        let registrations: Vec<EventRegistration> = self.client.get("/api/user/events").await?;
        debug!(count = registrations.len(), "User events listed");
        Ok(registrations)
    }

    #[instrument(skip(self))]
    async fn user_workshops(&self) -> Result<Vec<WorkshopRegistration>> {
        let registrations: Vec<WorkshopRegistration> = self.client.get("/api/user/workshops").await?;
        debug!(count = registrations.len(), "User workshops listed");
        Ok(registrations)
    }
}
