//! Domain types grouped by subject

pub mod event;
pub mod identity;
pub mod user;
pub mod workshop;

pub use event::*;
pub use identity::*;
pub use user::*;
pub use workshop::*;

use serde::{Deserialize, Serialize};

/// Publication status shared by events and workshops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Open,
    Closed,
    Cancelled,
}

impl ListingStatus {
    /// Value used in `?status=` query filters.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Answer of the "already registered?" checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCheck {
    pub registered: bool,
}
