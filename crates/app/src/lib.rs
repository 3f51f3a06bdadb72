//! # Symposium App
//!
//! Application layer - context wiring and UI-facing commands.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Commands returning human-readable error messages
//! - Logging bootstrap
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires infrastructure adapters into the core services once at start-up

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
