/// The closed set of slash commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Settings,
    AddAdmin,
    RemoveAdmin,
    AddMacro,
    RemoveMacro,
    Download,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Settings,
        CommandKind::AddAdmin,
        CommandKind::RemoveAdmin,
        CommandKind::AddMacro,
        CommandKind::RemoveMacro,
        CommandKind::Download,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Settings => "settings",
            CommandKind::AddAdmin => "add_admin",
            CommandKind::RemoveAdmin => "remove_admin",
            CommandKind::AddMacro => "add_macro",
            CommandKind::RemoveMacro => "remove_macro",
            CommandKind::Download => "download",
        }
    }

    /// Unknown names have no handler and get no reply.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Privileged commands mutate the admin or macro lists.
    pub fn requires_admin(self) -> bool {
        matches!(
            self,
            CommandKind::AddAdmin
                | CommandKind::RemoveAdmin
                | CommandKind::AddMacro
                | CommandKind::RemoveMacro
        )
    }
}

/// A command invocation with its typed arguments already extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Settings { attachment_url: String },
    AddAdmin { user_id: u64 },
    RemoveAdmin { user_id: u64 },
    AddMacro { name: String, response: String },
    RemoveMacro { name: String },
    Download,
}

impl BotCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            BotCommand::Settings { .. } => CommandKind::Settings,
            BotCommand::AddAdmin { .. } => CommandKind::AddAdmin,
            BotCommand::RemoveAdmin { .. } => CommandKind::RemoveAdmin,
            BotCommand::AddMacro { .. } => CommandKind::AddMacro,
            BotCommand::RemoveMacro { .. } => CommandKind::RemoveMacro,
            BotCommand::Download => CommandKind::Download,
        }
    }
}

/// Who ran the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub user_id: u64,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unknown_names_are_ignored() {
        assert_eq!(CommandKind::from_name("ban"), None);
        assert_eq!(CommandKind::from_name("Settings"), None);
    }

    #[test]
    fn only_mutating_commands_are_privileged() {
        assert!(!CommandKind::Settings.requires_admin());
        assert!(!CommandKind::Download.requires_admin());
        assert!(CommandKind::AddMacro.requires_admin());
        assert!(CommandKind::RemoveAdmin.requires_admin());
    }
}
