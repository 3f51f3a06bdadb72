//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! application.

// Request pipeline defaults
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TOKEN_WAIT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAYS_MS: [u64; 3] = [2_000, 4_000, 8_000];
pub const DEFAULT_LOG_FILTER: &str = "info";

// User-facing messages
pub const MSG_CONFIGURATION_ERROR: &str = "Server configuration error. Please contact support.";
pub const MSG_CONNECTIVITY_ERROR: &str =
    "Unable to connect to the server. Please check your internet connection or try again later.";
pub const MSG_UNPARSEABLE_ERROR_BODY: &str = "An error occurred";
pub const MSG_DECODE_ERROR: &str = "Received an unexpected response from the server.";

// Registration rules
pub const PHONE_DIGITS: usize = 10;
pub const DEFAULT_MIN_TEAM_SIZE: u32 = 2;
pub const DEFAULT_MAX_TEAM_SIZE: u32 = 4;
pub const INDIVIDUAL_NAME_PLACEHOLDER: &str = "participant";
pub const INDIVIDUAL_PHONE_PLACEHOLDER: &str = "phone";
pub const MSG_REGISTERED_PENDING: &str =
    "Registration successful! Your registration is pending verification.";
pub const MSG_REGISTERED_TEAM: &str =
    "Registration successful! Your team has been registered for this event.";

// Document store layout
pub const EVENTS_COLLECTION: &str = "events";
pub const WORKSHOPS_COLLECTION: &str = "workshops";
pub const USERS_COLLECTION: &str = "users";
pub const REGISTRATIONS_SUFFIX: &str = "_registrations";
pub const CONFIRMED_STATUS: &str = "confirmed";
