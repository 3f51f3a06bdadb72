//! In-memory port doubles shared by the core integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::json;
use symposium_core::{DocumentStore, SymposiumApi};
use symposium_domain::{
    Event, EventRegistration, EventRegistrationReceipt, EventRegistrationRequest, ListingStatus,
    RegistrationCheck, Result, SymposiumError, TeamNameAvailability, User, UserDocument,
    UserUpdate, Workshop, WorkshopRegistration, WorkshopRegistrationReceipt,
    WorkshopRegistrationRequest,
};

pub fn event(event_id: &str, min: u32, max: u32, fee: f64) -> Event {
    serde_json::from_value(json!({
        "event_id": event_id,
        "title": "Code Sprint",
        "description": "24h hackathon",
        "category": "technical",
        "date": "2026-03-14",
        "time": "09:00",
        "image_url": "/img/code-sprint.png",
        "max_participants": 120,
        "min_team_size": min,
        "max_team_size": max,
        "registration_fee": fee,
        "status": "open",
        "created_at": "2026-01-01T00:00:00Z"
    }))
    .unwrap()
}

pub fn workshop(workshop_id: &str) -> Workshop {
    serde_json::from_value(json!({
        "workshop_id": workshop_id,
        "title": "Rust for Robotics",
        "description": "Hands-on embedded Rust",
        "instructor": "Dr. Menon",
        "date": "2026-03-15",
        "time": "10:00",
        "duration": "3h",
        "image_url": "/img/rust.png",
        "max_participants": 40,
        "registration_fee": 300.0,
        "status": "open",
        "created_at": "2026-01-01T00:00:00Z",
        "organisers": []
    }))
    .unwrap()
}

pub fn event_registration(event_id: &str, leader_email: &str) -> EventRegistration {
    serde_json::from_value(json!({
        "registration_id": format!("{event_id}-reg"),
        "event_id": event_id,
        "event_name": "Code Sprint",
        "team_name": "byte-club",
        "leader_name": "Asha",
        "leader_email": leader_email,
        "leader_phone": "9876543210",
        "leader_year": "3",
        "college_name": "Example Institute",
        "members": [],
        "status": "confirmed",
        "registered_at": "2026-02-01T10:00:00Z"
    }))
    .unwrap()
}

pub fn workshop_registration(workshop_id: &str, email: &str) -> WorkshopRegistration {
    serde_json::from_value(json!({
        "registration_id": format!("{workshop_id}-reg"),
        "workshop_id": workshop_id,
        "workshop_name": "Rust for Robotics",
        "name": "Asha",
        "email": email,
        "phone": "9876543210",
        "year": "3",
        "college_name": "Example Institute",
        "payment_id": "pay_1",
        "order_id": "order_1",
        "amount": 300.0,
        "payment_status": "captured",
        "status": "confirmed",
        "registered_at": "2026-02-01T10:00:00Z"
    }))
    .unwrap()
}

pub fn user(email: &str) -> User {
    User {
        uid: "u-1".into(),
        name: "Asha".into(),
        email: email.into(),
        phone: None,
        college: None,
        profile_photo: None,
        created_at: "2026-01-01T00:00:00Z".into(),
        last_login: "2026-02-01T00:00:00Z".into(),
    }
}

fn unavailable() -> SymposiumError {
    SymposiumError::Network("Unable to connect to the server.".into())
}

/// Scripted `SymposiumApi`. Checks answer from the flags; every call is
/// recorded by name.
#[derive(Default)]
pub struct MockApi {
    pub calls: Mutex<Vec<String>>,
    pub already_registered: Mutex<Option<bool>>,
    pub team_name_available: Mutex<Option<bool>>,
    pub email_registered: Mutex<Option<bool>>,
    pub submit_error: Mutex<Option<SymposiumError>>,
    pub profile_available: Mutex<bool>,
    pub submitted_events: Mutex<Vec<EventRegistrationRequest>>,
    pub submitted_workshops: Mutex<Vec<WorkshopRegistrationRequest>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        let api = Self::default();
        *api.already_registered.lock() = Some(false);
        *api.team_name_available.lock() = Some(true);
        *api.email_registered.lock() = Some(false);
        *api.profile_available.lock() = true;
        Arc::new(api)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, name: &str) {
        self.calls.lock().push(name.to_string());
    }

    fn check(flag: &Mutex<Option<bool>>) -> Result<bool> {
        flag.lock().ok_or_else(unavailable)
    }
}

#[async_trait]
impl SymposiumApi for MockApi {
    async fn events(&self, _status: Option<ListingStatus>) -> Vec<Event> {
        self.record("events");
        vec![event("code-sprint", 2, 4, 0.0)]
    }

    async fn event(&self, event_id: &str) -> Result<Event> {
        self.record("event");
        Ok(event(event_id, 2, 4, 0.0))
    }

    async fn register_for_event(
        &self,
        event_id: &str,
        request: &EventRegistrationRequest,
    ) -> Result<EventRegistrationReceipt> {
        self.record("register_for_event");
        if let Some(err) = self.submit_error.lock().clone() {
            return Err(err);
        }
        self.submitted_events.lock().push(request.clone());
        Ok(EventRegistrationReceipt {
            message: "registered".into(),
            registration_id: format!("{event_id}-0001"),
            team_name: request.team_name.clone(),
        })
    }

    async fn check_team_name(&self, _event_id: &str, _team_name: &str) -> Result<TeamNameAvailability> {
        self.record("check_team_name");
        Self::check(&self.team_name_available).map(|available| TeamNameAvailability { available })
    }

    async fn check_event_registration(&self, _event_id: &str) -> Result<RegistrationCheck> {
        self.record("check_event_registration");
        Self::check(&self.already_registered).map(|registered| RegistrationCheck { registered })
    }

    async fn workshops(&self, _status: Option<ListingStatus>) -> Vec<Workshop> {
        self.record("workshops");
        vec![workshop("rust-robotics")]
    }

    async fn workshop(&self, workshop_id: &str) -> Result<Workshop> {
        self.record("workshop");
        Ok(workshop(workshop_id))
    }

    async fn register_workshop(
        &self,
        workshop_id: &str,
        request: &WorkshopRegistrationRequest,
    ) -> Result<WorkshopRegistrationReceipt> {
        self.record("register_workshop");
        if let Some(err) = self.submit_error.lock().clone() {
            return Err(err);
        }
        self.submitted_workshops.lock().push(request.clone());
        Ok(WorkshopRegistrationReceipt { message: "registered".into(), registration_id: format!("{workshop_id}-0001") })
    }

    async fn check_workshop_email(&self, _workshop_id: &str, _email: &str) -> Result<RegistrationCheck> {
        self.record("check_workshop_email");
        Self::check(&self.email_registered).map(|registered| RegistrationCheck { registered })
    }

    async fn check_workshop_registration(&self, _workshop_id: &str) -> Result<RegistrationCheck> {
        self.record("check_workshop_registration");
        Self::check(&self.already_registered).map(|registered| RegistrationCheck { registered })
    }

    async fn user_profile(&self) -> Result<User> {
        self.record("user_profile");
        if *self.profile_available.lock() {
            Ok(user("asha@example.org"))
        } else {
            Err(unavailable())
        }
    }

    async fn update_user_profile(&self, update: &UserUpdate) -> Result<User> {
        self.record("update_user_profile");
        let mut updated = user("asha@example.org");
        if let Some(name) = &update.name {
            updated.name.clone_from(name);
        }
        Ok(updated)
    }

    async fn user_events(&self) -> Result<Vec<EventRegistration>> {
        self.record("user_events");
        Ok(vec![event_registration("code-sprint", "asha@example.org")])
    }

    async fn user_workshops(&self) -> Result<Vec<WorkshopRegistration>> {
        self.record("user_workshops");
        Ok(Vec::new())
    }
}

/// `DocumentStore` backed by plain maps, with a switch to make every call fail.
#[derive(Default)]
pub struct MockStore {
    pub users: Mutex<HashMap<String, UserDocument>>,
    pub events: Mutex<Vec<EventRegistration>>,
    pub workshops: Mutex<Vec<WorkshopRegistration>>,
    pub failing: Mutex<bool>,
}

impl MockStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn guard(&self) -> Result<()> {
        if *self.failing.lock() {
            Err(SymposiumError::Storage("permission denied".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    async fn event_registrations_by_leader_email(&self, email: &str) -> Result<Vec<EventRegistration>> {
        self.guard()?;
        Ok(self.events.lock().iter().filter(|r| r.leader_email == email).cloned().collect())
    }

    async fn workshop_registrations_by_email(&self, email: &str) -> Result<Vec<WorkshopRegistration>> {
        self.guard()?;
        Ok(self
            .workshops
            .lock()
            .iter()
            .filter(|r| r.email == email && r.status == "confirmed")
            .cloned()
            .collect())
    }

    async fn user_document(&self, uid: &str) -> Result<Option<UserDocument>> {
        self.guard()?;
        Ok(self.users.lock().get(uid).cloned())
    }

    async fn put_user_document(&self, document: UserDocument) -> Result<()> {
        self.guard()?;
        self.users.lock().insert(document.uid.clone(), document);
        Ok(())
    }

    async fn touch_last_login(&self, uid: &str, at: DateTime<Utc>) -> Result<()> {
        self.guard()?;
        match self.users.lock().get_mut(uid) {
            Some(document) => {
                document.last_login = at;
                Ok(())
            }
            None => Err(SymposiumError::NotFound(uid.to_string())),
        }
    }
}
