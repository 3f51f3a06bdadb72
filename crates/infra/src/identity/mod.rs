//! In-process identity session

pub mod session;

pub use session::SessionIdentity;
