// Non-command events and the framework error hook.

use crate::discord::{Data, Error};
use poise::serenity_prelude as serenity;

/// Event handler for non-command Discord events.
/// Plain messages are checked against the macro list here.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        handle_message(ctx, new_message, data).await?;
    }

    Ok(())
}

async fn handle_message(
    ctx: &serenity::Context,
    new_message: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    // Ignore bot messages, including our own macro replies
    if new_message.author.bot {
        return Ok(());
    }

    if let Some(response) = data.dispatcher.on_message(&new_message.content).await {
        new_message.reply(&ctx.http, response).await?;
    }

    Ok(())
}

/// Anything the dispatcher didn't already turn into a reply ends up here.
pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to set up the bot: {}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(command = %ctx.command().name, "Command failed: {}", error);

            let reply = poise::CreateReply::default()
                .content("Something went wrong, please try again later")
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::warn!("Failed to report command error: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}
