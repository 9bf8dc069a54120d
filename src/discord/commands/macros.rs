use crate::core::dispatch::BotCommand;
use crate::discord::replies::run_command;
use crate::discord::{Context, Error};

/// Add a macro to the list of macros
#[poise::command(slash_command)]
pub async fn add_macro(
    ctx: Context<'_>,
    #[description = "The name of the macro"] name: String,
    #[description = "The response of the macro"] response: String,
) -> Result<(), Error> {
    run_command(ctx, BotCommand::AddMacro { name, response }).await
}

/// Remove a macro from the list of macros
#[poise::command(slash_command)]
pub async fn remove_macro(
    ctx: Context<'_>,
    #[description = "The name of the macro"] name: String,
) -> Result<(), Error> {
    run_command(ctx, BotCommand::RemoveMacro { name }).await
}
