//! Profile loading

pub mod service;

pub use service::{ProfileService, ProfileSnapshot, ProfileSource};
