use crate::core::dispatch::BotCommand;
use crate::discord::replies::run_command;
use crate::discord::{Context, Error};

/// Show download links for Panda3DS
#[poise::command(slash_command)]
pub async fn download(ctx: Context<'_>) -> Result<(), Error> {
    run_command(ctx, BotCommand::Download).await
}
