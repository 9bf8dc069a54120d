// Translation between poise/serenity types and the core's platform-neutral
// Invoker and Reply types.

use crate::core::dispatch::{BotCommand, EmbedReply, Invoker, Reply};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Discord rejects empty field names, so value-only fields get a zero-width space.
const BLANK_FIELD_NAME: &str = "\u{200B}";

/// Hand a command to the dispatcher and send back whatever it answers.
pub async fn run_command(ctx: Context<'_>, command: BotCommand) -> Result<(), Error> {
    let invoker = invoker_from(ctx.author());
    let reply = ctx.data().dispatcher.dispatch(&invoker, command).await;
    ctx.send(to_create_reply(reply)).await?;
    Ok(())
}

pub fn invoker_from(user: &serenity::User) -> Invoker {
    Invoker {
        user_id: user.id.get(),
        display_name: user.global_name.clone().unwrap_or_else(|| user.name.clone()),
        avatar_url: Some(user.face()),
    }
}

pub fn to_create_reply(reply: Reply) -> poise::CreateReply {
    match reply {
        Reply::Ephemeral(content) => poise::CreateReply::default()
            .content(content)
            .ephemeral(true),
        Reply::Embed(embed) => poise::CreateReply::default().embed(to_create_embed(embed)),
    }
}

pub fn to_create_embed(embed: EmbedReply) -> serenity::CreateEmbed {
    let mut out = serenity::CreateEmbed::new().color(embed.color);

    if let Some(author) = embed.author {
        let mut builder = serenity::CreateEmbedAuthor::new(author.name);
        if let Some(icon_url) = author.icon_url {
            builder = builder.icon_url(icon_url);
        }
        out = out.author(builder);
    }
    if let Some(url) = embed.thumbnail_url {
        out = out.thumbnail(url);
    }
    if let Some(description) = embed.description {
        out = out.description(description);
    }

    for field in embed.fields {
        let name = if field.name.is_empty() {
            BLANK_FIELD_NAME.to_string()
        } else {
            field.name
        };
        out = out.field(name, field.value, field.inline);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, global_name: Option<&str>) -> serenity::User {
        let mut user = serenity::User::default();
        user.id = serenity::UserId::new(1234);
        user.name = name.to_string();
        user.global_name = global_name.map(str::to_string);
        user
    }

    #[test]
    fn invoker_prefers_global_name() {
        let invoker = invoker_from(&user("pandafan", Some("Panda Fan")));
        assert_eq!(invoker.user_id, 1234);
        assert_eq!(invoker.display_name, "Panda Fan");
        assert!(invoker.avatar_url.is_some());
    }

    #[test]
    fn invoker_falls_back_to_username() {
        let invoker = invoker_from(&user("pandafan", None));
        assert_eq!(invoker.display_name, "pandafan");
    }

    #[test]
    fn text_replies_are_always_ephemeral() {
        let reply = to_create_reply(Reply::ephemeral("File size is 0"));
        assert_eq!(reply.content.as_deref(), Some("File size is 0"));
        assert_eq!(reply.ephemeral, Some(true));
    }

    #[test]
    fn embed_replies_are_public() {
        let reply = to_create_reply(Reply::Embed(EmbedReply::default()));
        assert_ne!(reply.ephemeral, Some(true));
        assert_eq!(reply.embeds.len(), 1);
    }
}
