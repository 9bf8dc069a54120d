// This is the entry point of the Panda3DS Discord bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (JSON files, HTTP)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

mod config;

use std::sync::Arc;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;

use crate::config::{BotConfig, RegistrationScope};
use crate::core::admins::AdminService;
use crate::core::dispatch::Dispatcher;
use crate::core::macros::MacroService;
use crate::core::settings::SettingsService;
use crate::discord::Data;
use crate::infra::{HttpAttachmentFetcher, JsonAdminStore, JsonMacroStore};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if it exists) first, so a
    // RUST_LOG set there reaches the subscriber
    dotenv::dotenv().ok();

    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: BotConfig) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "Failed to create data directory {}",
            config.data_dir.display()
        )
    })?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // The stores are owned by their services, the services by the dispatcher,
    // and the dispatcher is shared with every command through `Data`.

    let admin_store = JsonAdminStore::load(config.admins_path())
        .await
        .context("Failed to load admin list")?;
    let macro_store = JsonMacroStore::load(config.macros_path())
        .await
        .context("Failed to load macros")?;
    let fetcher = HttpAttachmentFetcher::new().context("Failed to create HTTP client")?;

    let dispatcher = Arc::new(Dispatcher::new(
        AdminService::new(admin_store),
        MacroService::new(macro_store),
        SettingsService::new(fetcher),
    ));

    if let Some(owner_id) = config.owner_id {
        if dispatcher
            .admins()
            .add_admin(owner_id)
            .await
            .context("Failed to add bot owner as admin")?
        {
            tracing::info!(owner_id, "Bootstrapped bot owner as admin");
        }
    }

    let admin_count = dispatcher.admins().admin_count().await?;
    let macro_count = dispatcher.macros().macro_count().await?;
    tracing::info!(
        admins = admin_count,
        macros = macro_count,
        data_dir = %config.data_dir.display(),
        "Loaded bot state"
    );

    let data = Data {
        dispatcher: Arc::clone(&dispatcher),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::MESSAGE_CONTENT; // Required to read message content for macros

    let scope = config.registration_scope();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: discord::commands::all(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(discord::events::event_handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(discord::events::on_error(error)),
            pre_command: |ctx| {
                Box::pin(async move {
                    tracing::info!(
                        command = %ctx.command().name,
                        user_id = ctx.author().id.get(),
                        "Received command"
                    );
                })
            },
            ..Default::default()
        })
        // Setup runs once, on the first Ready event, so commands are declared
        // once per process no matter how often the gateway reconnects.
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                tracing::info!("Logged in as {}", ready.user.name);

                let commands = &framework.options().commands;
                match scope {
                    RegistrationScope::Global => {
                        poise::builtins::register_globally(ctx, commands).await?;
                        tracing::info!("Commands registered globally");
                    }
                    RegistrationScope::Guild(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                        tracing::info!(guild_id, "Commands registered in development guild");
                    }
                }
                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
