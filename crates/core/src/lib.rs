//! # Symposium Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the API, identity subsystem and document store
//! - Registration form rules and the check-then-register flow
//! - Profile loading with document-store fallback
//! - Identity bootstrap on sign-in
//!
//! ## Architecture Principles
//! - Only depends on `symposium-domain`
//! - No HTTP, storage or identity-provider code
//! - All external dependencies via traits

pub mod identity;
pub mod profile;
pub mod registration;

// Infrastructure ports
pub mod api_ports;
pub mod document_store_ports;

pub use api_ports::SymposiumApi;
pub use document_store_ports::DocumentStore;
pub use identity::bootstrap::{BootstrapOutcome, IdentityBootstrap};
pub use identity::ports::{IdentityProvider, IdentitySubscription, TokenIssuer};
pub use profile::{ProfileService, ProfileSnapshot, ProfileSource};
pub use registration::forms::{
    EventRegistrationForm, FormError, TeamMemberInput, WorkshopRegistrationForm,
};
pub use registration::{RegistrationConfirmation, RegistrationService};
