//! Registration commands

use symposium_core::{EventRegistrationForm, RegistrationConfirmation, WorkshopRegistrationForm};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Register for `event_id` with the submitted form.
///
/// The event is fetched first: its team-size bounds and fee decide which
/// fields the form must carry.
pub async fn register_for_event(
    ctx: &AppContext,
    event_id: &str,
    form: EventRegistrationForm,
) -> Result<RegistrationConfirmation, String> {
    execute_command("registration::register_for_event", async {
        let event = ctx.api().event(event_id).await?;
        ctx.registrations.register_for_event(&event, &form).await
    })
    .await
}

/// Register for `workshop_id` with the submitted form.
pub async fn register_for_workshop(
    ctx: &AppContext,
    workshop_id: &str,
    form: WorkshopRegistrationForm,
) -> Result<RegistrationConfirmation, String> {
    execute_command("registration::register_for_workshop", async {
        let workshop = ctx.api().workshop(workshop_id).await?;
        ctx.registrations.register_for_workshop(&workshop, &form).await
    })
    .await
}
