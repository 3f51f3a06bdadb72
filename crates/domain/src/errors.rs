//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the symposium client
///
/// The `Display` output of every variant is the message presented to the
/// user; callers surface it as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SymposiumError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Auth(String),

    /// Server-provided rejection (already stringified detail).
    #[error("{0}")]
    Api(String),

    #[error("{0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SymposiumError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::Api(_) => "api",
            Self::Decode(_) => "decode",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Storage(_) => "storage",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for symposium operations
pub type Result<T> = std::result::Result<T, SymposiumError>;
