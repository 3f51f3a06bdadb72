//! Event and workshop listings

use symposium_domain::{Event, ListingStatus, Workshop};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// List events, optionally filtered by status.
///
/// Never fails: an unreachable API yields an empty list.
pub async fn list_events(
    ctx: &AppContext,
    status: Option<ListingStatus>,
) -> Result<Vec<Event>, String> {
    execute_command("listings::list_events", async { Ok(ctx.api().events(status).await) }).await
}

pub async fn event_details(ctx: &AppContext, event_id: &str) -> Result<Event, String> {
    execute_command("listings::event_details", ctx.api().event(event_id)).await
}

/// List workshops, optionally filtered by status.
pub async fn list_workshops(
    ctx: &AppContext,
    status: Option<ListingStatus>,
) -> Result<Vec<Workshop>, String> {
    execute_command("listings::list_workshops", async { Ok(ctx.api().workshops(status).await) })
        .await
}

pub async fn workshop_details(ctx: &AppContext, workshop_id: &str) -> Result<Workshop, String> {
    execute_command("listings::workshop_details", ctx.api().workshop(workshop_id)).await
}
