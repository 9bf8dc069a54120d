use crate::core::dispatch::BotCommand;
use crate::discord::replies::run_command;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Upload your Panda3DS settings file in a nicely formatted manner
#[poise::command(slash_command)]
pub async fn settings(
    ctx: Context<'_>,
    #[description = "The Panda3DS settings file"] file: serenity::Attachment,
) -> Result<(), Error> {
    run_command(
        ctx,
        BotCommand::Settings {
            attachment_url: file.url,
        },
    )
    .await
}
