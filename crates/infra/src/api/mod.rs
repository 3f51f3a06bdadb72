//! Symposium backend API client
//!
//! This module provides the authenticated request pipeline and the typed
//! endpoint surface built on it.
//!
//! # Architecture
//!
//! - Token provider: resolves a bearer token per request, never fatal
//! - Request executor: explicit bounded retry on transport failures only
//! - Error classification: configuration, connectivity, server rejection,
//!   decode
//! - Typed endpoints: events, workshops, user profile

pub mod auth;
pub mod client;
pub mod commands;
pub mod errors;
pub mod request;

pub use auth::{AccessTokenProvider, AuthUnavailable, IdentityTokenProvider, StaticTokenProvider};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, USER_AGENT};
pub use commands::ApiCommands;
pub use errors::{error_message_from_body, ApiError, ApiErrorCategory};
pub use request::ApiRequest;
