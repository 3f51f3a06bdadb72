//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use symposium_domain::SymposiumError;

use crate::http::TransportError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SymposiumError);

impl From<InfraError> for SymposiumError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SymposiumError> for InfraError {
    fn from(value: SymposiumError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSymposiumError {
    fn into_symposium(self) -> SymposiumError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TransportError / SymposiumError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        if err.is_builder() {
            return TransportError::Build(err.to_string());
        }
        if err.is_timeout() {
            return TransportError::Unreachable("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if err.is_connect() {
            return TransportError::Unreachable("HTTP connection failure".into());
        }

        TransportError::Unreachable(err.to_string())
    }
}

impl IntoSymposiumError for HttpError {
    fn into_symposium(self) -> SymposiumError {
        match TransportError::from(self) {
            TransportError::Unreachable(message) => SymposiumError::Network(message),
            TransportError::Build(message) => SymposiumError::Internal(message),
            TransportError::Body { reason, .. } => SymposiumError::Decode(reason),
        }
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_symposium())
    }
}

/* -------------------------------------------------------------------------- */
/* config parse errors → SymposiumError */
/* -------------------------------------------------------------------------- */

impl IntoSymposiumError for toml::de::Error {
    fn into_symposium(self) -> SymposiumError {
        SymposiumError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(value.into_symposium())
    }
}

impl IntoSymposiumError for serde_json::Error {
    fn into_symposium(self) -> SymposiumError {
        SymposiumError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_symposium())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
