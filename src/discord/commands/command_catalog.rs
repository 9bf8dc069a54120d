// Discord commands module.
// Each feature gets its own command file.

pub mod admins;
pub mod download;
pub mod macros;
pub mod settings;

use crate::discord::{Data, Error};

/// Every slash command the bot registers. The set is fixed at compile time.
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        settings::settings(),
        admins::add_admin(),
        admins::remove_admin(),
        macros::add_macro(),
        macros::remove_macro(),
        download::download(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatch::CommandKind;

    #[test]
    fn registered_commands_match_known_set() {
        let commands = all();
        assert_eq!(commands.len(), CommandKind::ALL.len());

        for command in &commands {
            assert!(
                CommandKind::from_name(&command.name).is_some(),
                "unexpected command {}",
                command.name
            );
        }
        for kind in CommandKind::ALL {
            assert!(commands.iter().any(|c| c.name == kind.name()));
        }
    }

    #[test]
    fn every_command_is_a_slash_command() {
        for command in all() {
            assert!(command.slash_action.is_some(), "{} has no slash action", command.name);
        }
    }
}
