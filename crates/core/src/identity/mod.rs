//! Identity subsystem ports and sign-in bootstrap

pub mod bootstrap;
pub mod ports;

pub use bootstrap::{BootstrapOutcome, IdentityBootstrap};
pub use ports::{IdentityProvider, IdentitySubscription, TokenIssuer};
