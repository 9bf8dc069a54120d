// Platform-neutral replies. The Discord layer turns these into poise/serenity builders.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text only the invoking user can see.
    Ephemeral(String),
    /// Embeds are always visible to the whole channel.
    Embed(EmbedReply),
}

impl Reply {
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Reply::Ephemeral(content.into())
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Reply::Ephemeral(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Ephemeral(content) => Some(content),
            Reply::Embed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedReply {
    pub color: u32,
    pub author: Option<EmbedAuthor>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: Option<String>,
}

/// An empty `name` means the field only shows its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn value_only(value: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            value: value.into(),
            inline: false,
        }
    }
}
