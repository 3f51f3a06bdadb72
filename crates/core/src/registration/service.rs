//! Check-then-register sequencing
//!
//! The availability checks are advisory: when a check itself fails the
//! submission proceeds and the backend has the final word.

use std::sync::Arc;

use symposium_domain::constants::{MSG_REGISTERED_PENDING, MSG_REGISTERED_TEAM};
use symposium_domain::{Event, Result, SymposiumError, Workshop};
use tracing::{info, warn};

use super::forms::{EventRegistrationForm, WorkshopRegistrationForm};
use crate::api_ports::SymposiumApi;

const MSG_TEAM_NAME_TAKEN: &str = "Team name already exists. Please choose a different name.";
const MSG_WORKSHOP_EMAIL_TAKEN: &str = "This email is already registered for this workshop.";

/// Outcome of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfirmation {
    pub registration_id: String,
    /// Message to show the user.
    pub message: String,
}

/// Drives event and workshop registrations through the API port
pub struct RegistrationService {
    api: Arc<dyn SymposiumApi>,
}

impl RegistrationService {
    pub fn new(api: Arc<dyn SymposiumApi>) -> Self {
        Self { api }
    }

    /// Validate, check for duplicates, then submit an event registration.
    pub async fn register_for_event(
        &self,
        event: &Event,
        form: &EventRegistrationForm,
    ) -> Result<RegistrationConfirmation> {
        let request = form.validate(event)?;

        match self.api.check_event_registration(&event.event_id).await {
            Ok(check) if check.registered => {
                return Err(SymposiumError::InvalidInput(format!(
                    "You are already registered for {}. You can only register once per event.",
                    event.title
                )));
            }
            Ok(_) => {}
            Err(err) => warn!(event_id = %event.event_id, error = %err, "registration check failed"),
        }

        if !event.is_individual() {
            match self.api.check_team_name(&event.event_id, &request.team_name).await {
                Ok(availability) if !availability.available => {
                    return Err(SymposiumError::InvalidInput(MSG_TEAM_NAME_TAKEN.to_string()));
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(event_id = %event.event_id, error = %err, "team name check failed, deferring to backend");
                }
            }
        }

        let receipt = self.api.register_for_event(&event.event_id, &request).await?;
        info!(
            event_id = %event.event_id,
            registration_id = %receipt.registration_id,
            team_name = %receipt.team_name,
            "event registration submitted"
        );

        let message = if event.requires_payment() { MSG_REGISTERED_PENDING } else { MSG_REGISTERED_TEAM };
        Ok(RegistrationConfirmation { registration_id: receipt.registration_id, message: message.to_string() })
    }

    /// Validate, check for duplicates, then submit a workshop registration.
    pub async fn register_for_workshop(
        &self,
        workshop: &Workshop,
        form: &WorkshopRegistrationForm,
    ) -> Result<RegistrationConfirmation> {
        let request = form.validate()?;
        let workshop_id = workshop.workshop_id.as_str();

        match self.api.check_workshop_registration(workshop_id).await {
            Ok(check) if check.registered => {
                return Err(SymposiumError::InvalidInput(format!(
                    "You are already registered for {}.",
                    workshop.title
                )));
            }
            Ok(_) => {}
            Err(err) => warn!(workshop_id, error = %err, "registration check failed"),
        }

        match self.api.check_workshop_email(workshop_id, &request.email).await {
            Ok(check) if check.registered => {
                return Err(SymposiumError::InvalidInput(MSG_WORKSHOP_EMAIL_TAKEN.to_string()));
            }
            Ok(_) => {}
            Err(err) => warn!(workshop_id, error = %err, "email check failed, deferring to backend"),
        }

        let receipt = self.api.register_workshop(workshop_id, &request).await?;
        info!(workshop_id, registration_id = %receipt.registration_id, "workshop registration submitted");

        Ok(RegistrationConfirmation {
            registration_id: receipt.registration_id,
            message: MSG_REGISTERED_PENDING.to_string(),
        })
    }
}
