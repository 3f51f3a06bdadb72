//! Event listings and team registrations

use serde::{Deserialize, Serialize};

use super::ListingStatus;
use crate::constants::{DEFAULT_MAX_TEAM_SIZE, DEFAULT_MIN_TEAM_SIZE};

/// Event organiser contact card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organiser {
    pub name: String,
    #[serde(default)]
    pub contact: Vec<String>,
}

/// Event as served by `GET /api/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    pub category: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub image_url: String,
    pub max_participants: Option<u32>,
    pub min_team_size: u32,
    pub max_team_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_team_event: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_fee: Option<f64>,
    pub status: ListingStatus,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, rename = "oneLiner", skip_serializing_if = "Option::is_none")]
    pub one_liner: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organiser: Option<Organiser>,
}

impl Event {
    /// Solo event: exactly one participant, no team name collected.
    pub fn is_individual(&self) -> bool {
        self.min_team_size == 1 && self.max_team_size == 1
    }

    /// Paid events require a transaction id at registration.
    pub fn requires_payment(&self) -> bool {
        self.registration_fee.is_some_and(|fee| fee > 0.0)
    }

    /// Members required besides the leader. A zero minimum falls back to
    /// the default team size.
    pub fn min_additional_members(&self) -> usize {
        let min = if self.min_team_size == 0 { DEFAULT_MIN_TEAM_SIZE } else { self.min_team_size };
        min.saturating_sub(1) as usize
    }

    /// Members allowed besides the leader. A zero maximum falls back to
    /// the default team size.
    pub fn max_additional_members(&self) -> usize {
        let max = if self.max_team_size == 0 { DEFAULT_MAX_TEAM_SIZE } else { self.max_team_size };
        max.saturating_sub(1) as usize
    }
}

/// Team member entry (leader excluded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Body of `POST /api/events/{id}/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistrationRequest {
    pub team_name: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_phone: String,
    pub leader_year: String,
    pub college_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<String>,
    /// Payment reference typed in by the user. Recorded verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub members: Vec<TeamMember>,
}

/// Response of a successful event registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistrationReceipt {
    pub message: String,
    pub registration_id: String,
    pub team_name: String,
}

/// Stored event registration, as listed for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistration {
    pub registration_id: String,
    pub event_id: String,
    pub event_name: String,
    pub team_name: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_phone: String,
    pub leader_year: String,
    pub college_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<String>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    pub status: String,
    pub registered_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_venue: Option<String>,
}

/// Answer of `GET /api/events/{id}/check-team-name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamNameAvailability {
    pub available: bool,
}
