//! Workshop listings and solo registrations

use serde::{Deserialize, Serialize};

use super::ListingStatus;

/// Workshop organiser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopOrganiser {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Workshop as served by `GET /api/workshops`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    pub workshop_id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    pub instructor: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub image_url: String,
    pub max_participants: Option<u32>,
    pub registration_fee: f64,
    pub status: ListingStatus,
    pub created_at: String,
    #[serde(default)]
    pub organisers: Vec<WorkshopOrganiser>,
}

/// Body of `POST /api/workshops/{id}/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopRegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub year: String,
    pub college_name: String,
    /// Payment reference typed in by the user. Required, never verified.
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<String>,
}

/// Response of a successful workshop registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopRegistrationReceipt {
    pub message: String,
    pub registration_id: String,
}

/// Stored workshop registration, as listed for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkshopRegistration {
    pub registration_id: String,
    pub workshop_id: String,
    pub workshop_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub year: String,
    pub college_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_id: Option<String>,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_status: String,
    pub status: String,
    pub registered_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workshop_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workshop_venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}
