//! Identity change hook

use symposium_core::BootstrapOutcome;
use symposium_domain::IdentityStatus;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Called by the host whenever the identity subsystem reports a new state.
///
/// Sign-ins record the user in the document store; a failed write is
/// reported as [`BootstrapOutcome::Failed`] and never blocks sign-in.
pub async fn handle_identity_change(
    ctx: &AppContext,
    status: IdentityStatus,
) -> Result<Option<BootstrapOutcome>, String> {
    execute_command("identity::handle_identity_change", async {
        Ok(ctx.on_identity_change(&status).await)
    })
    .await
}
