//! API-specific error types
//!
//! Every variant is terminal for the call that produced it. The `Display`
//! output is the message shown to the user.

use reqwest::StatusCode;
use serde_json::Value;
use symposium_domain::constants::{
    MSG_CONFIGURATION_ERROR, MSG_CONNECTIVITY_ERROR, MSG_DECODE_ERROR, MSG_UNPARSEABLE_ERROR_BODY,
};
use symposium_domain::SymposiumError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Base endpoint missing or invalid - never retried
    Configuration,
    /// Server unreachable after every attempt
    Connectivity,
    /// Server answered with a non-success status
    Rejected,
    /// Success status but the body did not match the expected shape
    Decode,
    /// Request could not be constructed
    Transport,
}

/// API operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{}", MSG_CONFIGURATION_ERROR)]
    Configuration,

    #[error("{}", MSG_CONNECTIVITY_ERROR)]
    Connectivity { attempts: u32 },

    /// Server-provided detail, stringified when structured.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Carries the parser error for logs; displays a generic message.
    #[error("{}", MSG_DECODE_ERROR)]
    Decode(String),

    #[error("Request could not be built: {0}")]
    Transport(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Configuration => ApiErrorCategory::Configuration,
            Self::Connectivity { .. } => ApiErrorCategory::Connectivity,
            Self::Api { .. } => ApiErrorCategory::Rejected,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Transport(_) => ApiErrorCategory::Transport,
        }
    }

    /// Whether the same call may succeed if the user tries again later.
    ///
    /// Server rejections are final: resubmitting a rejected registration
    /// would not change the answer.
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ApiErrorCategory::Connectivity)
    }

    /// HTTP status of a server rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn rejected(status: StatusCode, body: &[u8]) -> Self {
        Self::Api { status: status.as_u16(), message: error_message_from_body(status, body) }
    }
}

/// Human-readable message for an error response body.
///
/// A string `detail` is returned as-is, any other non-null `detail` as
/// compact JSON. A body without a usable `detail` yields
/// `HTTP error! status: <code>`; a body that is not JSON at all yields the
/// generic fallback message.
pub fn error_message_from_body(status: StatusCode, body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return MSG_UNPARSEABLE_ERROR_BODY.to_string();
    };

    match value.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Null | Value::String(_)) | None => {
            format!("HTTP error! status: {}", status.as_u16())
        }
        Some(detail) => detail.to_string(),
    }
}

impl From<ApiError> for SymposiumError {
    fn from(err: ApiError) -> Self {
        let message = err.to_string();
        match err {
            ApiError::Configuration => Self::Config(message),
            ApiError::Connectivity { .. } => Self::Network(message),
            ApiError::Api { status: 401 | 403, .. } => Self::Auth(message),
            ApiError::Api { .. } => Self::Api(message),
            ApiError::Decode(_) => Self::Decode(message),
            ApiError::Transport(_) => Self::Internal(message),
        }
    }
}
