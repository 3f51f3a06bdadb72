//! Commands - UI to backend bridge
//!
//! Every command returns `Result<T, String>` where the error is the message
//! to show the user.

mod health;
mod identity;
mod listings;
mod profile;
mod registration;

pub use health::*;
pub use identity::*;
pub use listings::*;
pub use profile::*;
pub use registration::*;
