//! Event and workshop registration flows

pub mod forms;
pub mod service;

pub use forms::{
    individual_team_name, normalize_phone, EventRegistrationForm, FormError, TeamMemberInput,
    WorkshopRegistrationForm,
};
pub use service::{RegistrationConfirmation, RegistrationService};
