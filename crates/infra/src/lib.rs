//! # Symposium Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP transport (reqwest)
//! - Token provider and request executor for the symposium API
//! - Typed endpoint surface implementing [`symposium_core::SymposiumApi`]
//! - In-process identity session and document store
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `symposium-core`
//! - Depends on `symposium-common`, `symposium-domain` and `symposium-core`
//! - Contains all "impure" code (network, environment, files)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod identity;
pub mod store;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, ApiClient, ApiClientConfig, ApiCommands, ApiError, ApiErrorCategory,
    ApiRequest, AuthUnavailable, IdentityTokenProvider,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpTransport, PreparedRequest, TransportError, TransportResponse};
pub use identity::SessionIdentity;
pub use store::InMemoryDocumentStore;
