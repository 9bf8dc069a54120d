// Routes commands to the admin, macro and settings services and turns their
// results into replies.
//
// Every request-level failure (bad download, bad file, newline in a macro,
// missing permission, duplicate/missing entries, storage trouble) ends here as
// a single ephemeral reply. Nothing is retried.

use std::future::Future;

use super::command::{BotCommand, CommandKind, Invoker};
use super::reply::{EmbedAuthor, EmbedField, EmbedReply, Reply};
use crate::core::admins::{AdminService, AdminStore};
use crate::core::macros::{MacroError, MacroService, MacroStore};
use crate::core::settings::{checkbox, AttachmentFetcher, SettingsService, SettingsSnapshot};

pub const PANDA_BLUE: u32 = 0x0062A8;
pub const PANDA_ICON_URL: &str = "https://panda3ds.com/images/panda-icon.png";
pub const DOWNLOAD_PAGE_URL: &str = "https://panda3ds.com/download.html";

pub const NOT_AUTHORIZED: &str = "You do not have permission to use this command";
pub const STORAGE_FAILURE: &str = "Something went wrong while saving, please try again later";

pub struct Dispatcher<A: AdminStore, M: MacroStore, F: AttachmentFetcher> {
    admins: AdminService<A>,
    macros: MacroService<M>,
    settings: SettingsService<F>,
}

impl<A: AdminStore, M: MacroStore, F: AttachmentFetcher> Dispatcher<A, M, F> {
    pub fn new(
        admins: AdminService<A>,
        macros: MacroService<M>,
        settings: SettingsService<F>,
    ) -> Self {
        Self {
            admins,
            macros,
            settings,
        }
    }

    pub fn admins(&self) -> &AdminService<A> {
        &self.admins
    }

    pub fn macros(&self) -> &MacroService<M> {
        &self.macros
    }

    /// Handle one slash command and produce exactly one reply.
    pub async fn dispatch(&self, invoker: &Invoker, command: BotCommand) -> Reply {
        let kind = command.kind();
        tracing::debug!(
            command = kind.name(),
            user_id = invoker.user_id,
            "Dispatching command"
        );

        match command {
            BotCommand::Settings { attachment_url } => {
                self.settings_summary(invoker, &attachment_url).await
            }
            BotCommand::AddAdmin { user_id } => {
                self.admin_only(invoker, kind, self.add_admin(user_id))
                    .await
            }
            BotCommand::RemoveAdmin { user_id } => {
                self.admin_only(invoker, kind, self.remove_admin(user_id))
                    .await
            }
            BotCommand::AddMacro { name, response } => {
                self.admin_only(invoker, kind, self.add_macro(invoker, &name, &response))
                    .await
            }
            BotCommand::RemoveMacro { name } => {
                self.admin_only(invoker, kind, self.remove_macro(&name))
                    .await
            }
            BotCommand::Download => Reply::Embed(download_embed()),
        }
    }

    /// Scan a plain chat message for macro names. `None` means stay quiet.
    pub async fn on_message(&self, text: &str) -> Option<String> {
        match self.macros.lookup(text).await {
            Ok(hit) => hit.map(|entry| {
                tracing::debug!(macro_name = %entry.name, "Macro triggered");
                entry.response
            }),
            Err(e) => {
                tracing::error!("Macro lookup failed: {}", e);
                None
            }
        }
    }

    /// Only runs `handler` if the invoker is an admin. The handler future is
    /// never polled otherwise, so it cannot touch any store.
    async fn admin_only<Fut>(&self, invoker: &Invoker, kind: CommandKind, handler: Fut) -> Reply
    where
        Fut: Future<Output = Reply>,
    {
        match self.admins.is_admin(invoker.user_id).await {
            Ok(true) => handler.await,
            Ok(false) => {
                tracing::warn!(
                    command = kind.name(),
                    user_id = invoker.user_id,
                    "Rejected privileged command from non-admin"
                );
                Reply::ephemeral(NOT_AUTHORIZED)
            }
            Err(e) => {
                // Fail closed: if we can't tell, the answer is no.
                tracing::error!(command = kind.name(), "Admin check failed: {}", e);
                Reply::ephemeral(NOT_AUTHORIZED)
            }
        }
    }

    async fn settings_summary(&self, invoker: &Invoker, attachment_url: &str) -> Reply {
        match self.settings.summarize(attachment_url).await {
            Ok(snapshot) => Reply::Embed(settings_embed(invoker, &snapshot)),
            Err(e) => {
                tracing::warn!(user_id = invoker.user_id, "Settings upload rejected: {}", e);
                Reply::ephemeral(e.user_message())
            }
        }
    }

    async fn add_admin(&self, user_id: u64) -> Reply {
        match self.admins.add_admin(user_id).await {
            Ok(true) => Reply::ephemeral("User added as admin"),
            Ok(false) => Reply::ephemeral("User is already an admin"),
            Err(e) => {
                tracing::error!(user_id, "Failed to add admin: {}", e);
                Reply::ephemeral(STORAGE_FAILURE)
            }
        }
    }

    async fn remove_admin(&self, user_id: u64) -> Reply {
        match self.admins.remove_admin(user_id).await {
            Ok(true) => Reply::ephemeral("User removed from admins"),
            Ok(false) => Reply::ephemeral("User is not an admin"),
            Err(e) => {
                tracing::error!(user_id, "Failed to remove admin: {}", e);
                Reply::ephemeral(STORAGE_FAILURE)
            }
        }
    }

    async fn add_macro(&self, invoker: &Invoker, name: &str, response: &str) -> Reply {
        match self.macros.add_macro(name, response, invoker.user_id).await {
            Ok(true) => Reply::ephemeral("Macro added"),
            Ok(false) => Reply::ephemeral("Macro already exists"),
            Err(e @ (MacroError::ContainsNewline | MacroError::EmptyName)) => {
                Reply::ephemeral(e.to_string())
            }
            Err(e) => {
                tracing::error!(macro_name = name, "Failed to add macro: {}", e);
                Reply::ephemeral(STORAGE_FAILURE)
            }
        }
    }

    async fn remove_macro(&self, name: &str) -> Reply {
        match self.macros.remove_macro(name).await {
            Ok(true) => Reply::ephemeral("Macro removed"),
            Ok(false) => Reply::ephemeral("Macro does not exist"),
            Err(e) => {
                tracing::error!(macro_name = name, "Failed to remove macro: {}", e);
                Reply::ephemeral(STORAGE_FAILURE)
            }
        }
    }
}

fn settings_embed(invoker: &Invoker, snapshot: &SettingsSnapshot) -> EmbedReply {
    EmbedReply {
        color: PANDA_BLUE,
        author: Some(EmbedAuthor {
            name: format!("{}'s settings", invoker.display_name),
            icon_url: invoker.avatar_url.clone(),
        }),
        thumbnail_url: Some(PANDA_ICON_URL.to_string()),
        description: None,
        fields: vec![
            EmbedField::value_only(format!(
                "Renderer: {}",
                snapshot.renderer.display_token()
            )),
            EmbedField::value_only(format!("Shader JIT: {}", checkbox(snapshot.shader_jit))),
            EmbedField::value_only(format!("DSP Emulation: {}", snapshot.dsp_emulation)),
        ],
    }
}

fn download_embed() -> EmbedReply {
    EmbedReply {
        color: PANDA_BLUE,
        author: Some(EmbedAuthor {
            name: "Download".to_string(),
            icon_url: Some(PANDA_ICON_URL.to_string()),
        }),
        thumbnail_url: Some(PANDA_ICON_URL.to_string()),
        description: Some(format!(
            "Download the latest version of Panda3DS [here]({})",
            DOWNLOAD_PAGE_URL
        )),
        fields: Vec::new(),
    }
}
