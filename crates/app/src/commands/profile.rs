//! Profile commands

use symposium_core::ProfileSnapshot;
use symposium_domain::{SymposiumError, User, UserUpdate};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

const MSG_SIGN_IN_REQUIRED: &str = "Please sign in to view your profile.";
const MSG_NOTHING_TO_UPDATE: &str = "Nothing to update.";

/// Profile, event and workshop registrations of the signed-in user.
///
/// Falls back to the document store when the API is unavailable; the
/// snapshot says which source answered.
pub async fn load_profile(ctx: &AppContext) -> Result<ProfileSnapshot, String> {
    execute_command("profile::load_profile", async {
        let identity =
            ctx.signed_in().ok_or_else(|| SymposiumError::Auth(MSG_SIGN_IN_REQUIRED.into()))?;
        let email = identity.email.unwrap_or_default();
        Ok(ctx.profiles.load(&email).await)
    })
    .await
}

pub async fn update_profile(ctx: &AppContext, update: UserUpdate) -> Result<User, String> {
    execute_command("profile::update_profile", async {
        if update.is_empty() {
            return Err(SymposiumError::InvalidInput(MSG_NOTHING_TO_UPDATE.into()));
        }
        ctx.api().update_user_profile(&update).await
    })
    .await
}
