// Discord layer - commands and event handlers.
//
// Everything that touches poise or serenity lives under here. Commands pull
// primitives out of the interaction, hand them to the core dispatcher and
// convert whatever reply comes back.

use std::sync::Arc;

use crate::core::dispatch::Dispatcher;
use crate::infra::{HttpAttachmentFetcher, JsonAdminStore, JsonMacroStore};

#[path = "commands/command_catalog.rs"]
pub mod commands;

pub mod events;
pub mod replies;

pub type BotDispatcher = Dispatcher<JsonAdminStore, JsonMacroStore, HttpAttachmentFetcher>;

/// Shared state handed to every command and event.
pub struct Data {
    pub dispatcher: Arc<BotDispatcher>,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
