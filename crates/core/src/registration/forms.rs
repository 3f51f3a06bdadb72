//! Registration form rules
//!
//! Forms hold raw user input. `validate` applies the registration rules in
//! a fixed order and produces the request body sent to the backend, or the
//! first violated rule.

use serde::{Deserialize, Serialize};
use symposium_domain::constants::{
    INDIVIDUAL_NAME_PLACEHOLDER, INDIVIDUAL_PHONE_PLACEHOLDER, PHONE_DIGITS,
};
use symposium_domain::{
    Event, EventRegistrationRequest, SymposiumError, TeamMember, WorkshopRegistrationRequest,
};
use thiserror::Error;

/// First rule a form violates; `Display` is the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill all required fields")]
    MissingRequired,

    #[error("Please enter the Transaction ID after completing the payment")]
    MissingTransactionId,

    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,

    #[error("Please enter a valid 10-digit phone number for team member {0}")]
    InvalidMemberPhone(String),

    #[error("At least {required} additional team {phrase}")]
    TooFewMembers { required: usize, phrase: &'static str },

    #[error("At most {allowed} additional team members are allowed")]
    TooManyMembers { allowed: usize },
}

impl FormError {
    fn too_few_members(required: usize) -> Self {
        let phrase = if required == 1 { "member is required" } else { "members are required" };
        Self::TooFewMembers { required, phrase }
    }
}

impl From<FormError> for SymposiumError {
    fn from(err: FormError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Keep only the ASCII digits of a phone number.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn is_valid_phone(raw: &str) -> bool {
    normalize_phone(raw).len() == PHONE_DIGITS
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Team name generated for solo events: `<name>-<phone digits>`, lower-cased,
/// whitespace runs replaced by `-`.
pub fn individual_team_name(leader_name: &str, leader_phone: &str) -> String {
    let name = leader_name.trim();
    let name = if name.is_empty() { INDIVIDUAL_NAME_PLACEHOLDER } else { name };
    let digits = normalize_phone(leader_phone);
    let digits = if digits.is_empty() { INDIVIDUAL_PHONE_PLACEHOLDER } else { digits.as_str() };

    format!("{name}-{digits}").split_whitespace().collect::<Vec<_>>().join("-").to_lowercase()
}

/// Raw team member row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl TeamMemberInput {
    /// Rows missing any field are ignored on submission.
    fn is_filled(&self) -> bool {
        !is_blank(&self.name) && !is_blank(&self.email) && !is_blank(&self.phone)
    }
}

/// Raw event registration input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistrationForm {
    pub team_name: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_phone: String,
    pub leader_year: String,
    pub college_name: String,
    #[serde(default)]
    pub referral_id: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub members: Vec<TeamMemberInput>,
}

impl EventRegistrationForm {
    /// Validate against `event` and build the request body.
    pub fn validate(&self, event: &Event) -> Result<EventRegistrationRequest, FormError> {
        let individual = event.is_individual();

        let leader_fields =
            [&self.leader_name, &self.leader_year, &self.leader_email, &self.leader_phone, &self.college_name];
        if (!individual && is_blank(&self.team_name)) || leader_fields.iter().any(|f| is_blank(f)) {
            return Err(FormError::MissingRequired);
        }

        if event.requires_payment() && is_blank(&self.transaction_id) {
            return Err(FormError::MissingTransactionId);
        }

        if !is_valid_phone(&self.leader_phone) {
            return Err(FormError::InvalidPhone);
        }

        let filled: Vec<&TeamMemberInput> = self.members.iter().filter(|m| m.is_filled()).collect();

        let required = event.min_additional_members();
        if filled.len() < required {
            return Err(FormError::too_few_members(required));
        }
        let allowed = event.max_additional_members();
        if !individual && filled.len() > allowed {
            return Err(FormError::TooManyMembers { allowed });
        }

        if let Some(member) = filled.iter().find(|m| !is_valid_phone(&m.phone)) {
            return Err(FormError::InvalidMemberPhone(member.name.trim().to_string()));
        }

        let team_name = if individual {
            individual_team_name(&self.leader_name, &self.leader_phone)
        } else {
            self.team_name.trim().to_string()
        };

        Ok(EventRegistrationRequest {
            team_name,
            leader_name: self.leader_name.trim().to_string(),
            leader_email: self.leader_email.trim().to_string(),
            leader_phone: normalize_phone(&self.leader_phone),
            leader_year: self.leader_year.trim().to_string(),
            college_name: self.college_name.trim().to_string(),
            referral_id: non_blank(&self.referral_id),
            transaction_id: non_blank(&self.transaction_id),
            members: filled
                .into_iter()
                .map(|m| TeamMember {
                    name: m.name.trim().to_string(),
                    email: m.email.trim().to_string(),
                    phone: normalize_phone(&m.phone),
                })
                .collect(),
        })
    }
}

/// Raw workshop registration input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopRegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub year: String,
    pub college_name: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub referral_id: String,
}

impl WorkshopRegistrationForm {
    pub fn validate(&self) -> Result<WorkshopRegistrationRequest, FormError> {
        let required = [&self.name, &self.email, &self.phone, &self.year, &self.college_name];
        if required.iter().any(|f| is_blank(f)) {
            return Err(FormError::MissingRequired);
        }
        if is_blank(&self.transaction_id) {
            return Err(FormError::MissingTransactionId);
        }
        if !is_valid_phone(&self.phone) {
            return Err(FormError::InvalidPhone);
        }

        Ok(WorkshopRegistrationRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: normalize_phone(&self.phone),
            year: self.year.trim().to_string(),
            college_name: self.college_name.trim().to_string(),
            transaction_id: self.transaction_id.trim().to_string(),
            referral_id: non_blank(&self.referral_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn event(min: u32, max: u32, fee: f64) -> Event {
        serde_json::from_value(json!({
            "event_id": "code-sprint",
            "title": "Code Sprint",
            "description": "24h hackathon",
            "category": "technical",
            "date": "2026-03-14",
            "time": "09:00",
            "image_url": "/img/code-sprint.png",
            "max_participants": null,
            "min_team_size": min,
            "max_team_size": max,
            "registration_fee": fee,
            "status": "open",
            "created_at": "2026-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn member(name: &str, phone: &str) -> TeamMemberInput {
        TeamMemberInput { name: name.into(), email: format!("{name}@example.org"), phone: phone.into() }
    }

    fn team_form() -> EventRegistrationForm {
        EventRegistrationForm {
            team_name: "  Byte Club ".into(),
            leader_name: "Asha Rao".into(),
            leader_email: "asha@example.org".into(),
            leader_phone: "(987) 654-3210".into(),
            leader_year: "3".into(),
            college_name: "Example Institute".into(),
            members: vec![member("ravi", "9123456780")],
            ..Default::default()
        }
    }

    #[test]
    fn normalize_phone_keeps_digits_only() {
        assert_eq!(normalize_phone("98765-43210"), "9876543210");
        assert_eq!(normalize_phone("(987) 654 3210"), "9876543210");
        assert_eq!(normalize_phone("abc"), "");
    }

    #[test]
    fn individual_team_name_is_slugged() {
        assert_eq!(individual_team_name("Asha  Rao", "98765 43210"), "asha-rao-9876543210");
        assert_eq!(individual_team_name("", ""), "participant-phone");
    }

    #[test]
    fn builds_team_request() {
        let request = team_form().validate(&event(2, 4, 0.0)).unwrap();
        assert_eq!(request.team_name, "Byte Club");
        assert_eq!(request.leader_phone, "9876543210");
        assert_eq!(request.members.len(), 1);
        assert_eq!(request.referral_id, None);
        assert_eq!(request.transaction_id, None);
    }

    #[test]
    fn missing_team_name_rejected_for_team_events() {
        let form = EventRegistrationForm { team_name: "  ".into(), ..team_form() };
        assert_eq!(form.validate(&event(2, 4, 0.0)), Err(FormError::MissingRequired));
    }

    #[test]
    fn individual_event_generates_team_name() {
        let form = EventRegistrationForm {
            team_name: String::new(),
            leader_phone: "9876543210".into(),
            members: Vec::new(),
            ..team_form()
        };
        let request = form.validate(&event(1, 1, 0.0)).unwrap();
        assert_eq!(request.team_name, "asha-rao-9876543210");
        assert!(request.members.is_empty());
    }

    #[test]
    fn paid_event_requires_transaction_id() {
        let err = team_form().validate(&event(2, 4, 200.0)).unwrap_err();
        assert_eq!(err.to_string(), "Please enter the Transaction ID after completing the payment");

        let form = EventRegistrationForm { transaction_id: " TXN-42 ".into(), ..team_form() };
        let request = form.validate(&event(2, 4, 200.0)).unwrap();
        assert_eq!(request.transaction_id.as_deref(), Some("TXN-42"));
    }

    #[test]
    fn leader_phone_must_have_ten_digits() {
        let form = EventRegistrationForm { leader_phone: "12345".into(), ..team_form() };
        assert_eq!(form.validate(&event(2, 4, 0.0)), Err(FormError::InvalidPhone));
    }

    #[test]
    fn too_few_members_message_is_pluralised() {
        let err = team_form().validate(&event(3, 4, 0.0)).unwrap_err();
        assert_eq!(err.to_string(), "At least 2 additional team members are required");

        let form = EventRegistrationForm { members: Vec::new(), ..team_form() };
        let err = form.validate(&event(2, 4, 0.0)).unwrap_err();
        assert_eq!(err.to_string(), "At least 1 additional team member is required");
    }

    #[test]
    fn partially_filled_members_are_ignored() {
        let mut form = team_form();
        form.members.push(TeamMemberInput { name: "half".into(), ..Default::default() });
        let request = form.validate(&event(2, 4, 0.0)).unwrap();
        assert_eq!(request.members.len(), 1);
    }

    #[test]
    fn too_many_members_rejected() {
        let mut form = team_form();
        form.members = vec![member("a", "9000000001"), member("b", "9000000002"), member("c", "9000000003")];
        assert_eq!(form.validate(&event(2, 3, 0.0)), Err(FormError::TooManyMembers { allowed: 2 }));
    }

    #[test]
    fn member_phone_error_names_the_member() {
        let form = EventRegistrationForm { members: vec![member("ravi", "123")], ..team_form() };
        let err = form.validate(&event(2, 4, 0.0)).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid 10-digit phone number for team member ravi");
    }

    #[test]
    fn workshop_form_requires_transaction_id() {
        let form = WorkshopRegistrationForm {
            name: "Asha".into(),
            email: "asha@example.org".into(),
            phone: "9876543210".into(),
            year: "2".into(),
            college_name: "Example Institute".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::MissingTransactionId));

        let request = WorkshopRegistrationForm { transaction_id: "UPI-1".into(), ..form }.validate().unwrap();
        assert_eq!(request.transaction_id, "UPI-1");
        assert_eq!(request.referral_id, None);
    }

    #[test]
    fn form_error_becomes_invalid_input() {
        let err: SymposiumError = FormError::MissingRequired.into();
        assert_eq!(err, SymposiumError::InvalidInput("Please fill all required fields".into()));
    }
}
