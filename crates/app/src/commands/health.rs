//! Health check command for status displays

use crate::context::{AppContext, HealthStatus};

/// Get application health status
///
/// # Example Response
/// ```json
/// { "api_reachable": true, "identity": "signed_in", "message": null }
/// ```
pub async fn get_app_health(ctx: &AppContext) -> Result<HealthStatus, String> {
    Ok(ctx.health_check().await)
}
