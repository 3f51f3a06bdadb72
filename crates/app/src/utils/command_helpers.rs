//! Command execution helpers

use std::future::Future;
use std::time::Instant;

use symposium_domain::Result as DomainResult;

use crate::utils::logging::log_command_execution;

/// Run a command body, log its outcome and timing, and turn any error into
/// the message shown to the user.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext, id: &str) -> Result<Thing, String> {
///     execute_command("things::my_command", async { ctx.api().thing(id).await }).await
/// }
/// ```
pub async fn execute_command<Fut, T>(command_name: &str, command: Fut) -> Result<T, String>
where
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command.await;

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());

    result.map_err(|e| e.to_string())
}
