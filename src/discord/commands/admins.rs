// Admin list management. Both commands are gated by the dispatcher, so a
// non-admin gets an ephemeral refusal and nothing changes.

use crate::core::dispatch::BotCommand;
use crate::discord::replies::run_command;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Add a user to the list of admins
#[poise::command(slash_command)]
pub async fn add_admin(
    ctx: Context<'_>,
    #[description = "The user to add as an admin"] user: serenity::User,
) -> Result<(), Error> {
    run_command(
        ctx,
        BotCommand::AddAdmin {
            user_id: user.id.get(),
        },
    )
    .await
}

/// Remove a user from the list of admins
#[poise::command(slash_command)]
pub async fn remove_admin(
    ctx: Context<'_>,
    #[description = "The user to remove as an admin"] user: serenity::User,
) -> Result<(), Error> {
    run_command(
        ctx,
        BotCommand::RemoveAdmin {
            user_id: user.id.get(),
        },
    )
    .await
}
