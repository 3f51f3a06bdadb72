//! Port interface for the symposium backend API
//!
//! Every call goes through the authenticated request pipeline in infra.
//! Listing calls never fail: a failed listing is logged and yields an
//! empty list.

use async_trait::async_trait;
use symposium_domain::{
    Event, EventRegistration, EventRegistrationReceipt, EventRegistrationRequest, ListingStatus,
    RegistrationCheck, Result, TeamNameAvailability, User, UserUpdate, Workshop,
    WorkshopRegistration, WorkshopRegistrationReceipt, WorkshopRegistrationRequest,
};

/// Typed surface of the symposium backend
#[async_trait]
pub trait SymposiumApi: Send + Sync {
    /// `GET /api/events[?status=]`, empty on failure
    async fn events(&self, status: Option<ListingStatus>) -> Vec<Event>;

    async fn event(&self, event_id: &str) -> Result<Event>;

    async fn register_for_event(
        &self,
        event_id: &str,
        request: &EventRegistrationRequest,
    ) -> Result<EventRegistrationReceipt>;

    async fn check_team_name(&self, event_id: &str, team_name: &str)
        -> Result<TeamNameAvailability>;

    /// Whether the signed-in user already registered for the event
    async fn check_event_registration(&self, event_id: &str) -> Result<RegistrationCheck>;

    /// `GET /api/workshops[?status=]`, empty on failure
    async fn workshops(&self, status: Option<ListingStatus>) -> Vec<Workshop>;

    async fn workshop(&self, workshop_id: &str) -> Result<Workshop>;

    async fn register_workshop(
        &self,
        workshop_id: &str,
        request: &WorkshopRegistrationRequest,
    ) -> Result<WorkshopRegistrationReceipt>;

    /// Whether `email` is already registered for the workshop
    async fn check_workshop_email(&self, workshop_id: &str, email: &str)
        -> Result<RegistrationCheck>;

    async fn check_workshop_registration(&self, workshop_id: &str) -> Result<RegistrationCheck>;

    async fn user_profile(&self) -> Result<User>;

    async fn update_user_profile(&self, update: &UserUpdate) -> Result<User>;

    async fn user_events(&self) -> Result<Vec<EventRegistration>>;

    async fn user_workshops(&self) -> Result<Vec<WorkshopRegistration>>;
}
