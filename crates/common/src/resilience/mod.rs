//! Resilience primitives for retrying transient failures
//!
//! This module provides the **generic** building blocks the request
//! pipeline is assembled from:
//! - **[`BackoffSchedule`]**: an explicit, ordered list of retry delays
//!   bounded by a maximum attempt count
//! - **[`Sleeper`]**: an awaitable delay abstraction so retry loops can be
//!   exercised without real time passing
//!
//! The retry *loop* itself lives with the caller (the API request executor),
//! which decides what counts as a transient failure.

pub mod backoff;
pub mod sleeper;

pub use backoff::BackoffSchedule;
pub use sleeper::{Sleeper, TokioSleeper};
