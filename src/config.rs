// Startup configuration.
//
// The bot token comes from a file (first line only). Everything else is an
// optional environment variable, which may also be set through a `.env` file.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_TOKEN_FILE: &str = "token.txt";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open token file {path}: {source}")]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Token file {0} is empty")]
    EmptyToken(PathBuf),
    #[error("{var} must be a Discord id, got {value:?}")]
    InvalidId { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    /// Where `admins.json` and `macros.json` live.
    pub data_dir: PathBuf,
    /// Seeded into the admin list at startup so a fresh install has someone
    /// who can run `/add_admin`.
    pub owner_id: Option<u64>,
    /// When set, commands go to this guild only, for instant updates while developing.
    pub dev_guild_id: Option<u64>,
}

/// Where slash commands get declared. Exactly one scope per process, so
/// Discord never lists the same command twice in a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationScope {
    Global,
    Guild(u64),
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_file =
            std::env::var("BOT_TOKEN_FILE").unwrap_or_else(|_| DEFAULT_TOKEN_FILE.to_string());
        let data_dir =
            std::env::var("BOT_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());

        Ok(Self {
            token: read_token(Path::new(&token_file))?,
            data_dir: PathBuf::from(data_dir),
            owner_id: parse_id("BOT_OWNER_ID", std::env::var("BOT_OWNER_ID").ok())?,
            dev_guild_id: parse_id("BOT_DEV_GUILD_ID", std::env::var("BOT_DEV_GUILD_ID").ok())?,
        })
    }

    pub fn registration_scope(&self) -> RegistrationScope {
        match self.dev_guild_id {
            Some(guild_id) => RegistrationScope::Guild(guild_id),
            None => RegistrationScope::Global,
        }
    }

    pub fn admins_path(&self) -> PathBuf {
        self.data_dir.join("admins.json")
    }

    pub fn macros_path(&self) -> PathBuf {
        self.data_dir.join("macros.json")
    }
}

/// Read the first line of the token file, trimmed.
pub fn read_token(path: &Path) -> Result<String, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::TokenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let token = contents.lines().next().unwrap_or_default().trim();
    if token.is_empty() {
        return Err(ConfigError::EmptyToken(path.to_path_buf()));
    }
    Ok(token.to_string())
}

fn parse_id(var: &'static str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => match raw.parse::<u64>() {
            Ok(id) if id != 0 => Ok(Some(id)),
            _ => Err(ConfigError::InvalidId {
                var,
                value: raw.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn token_is_first_line_only() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  abc.def.ghi  ").unwrap();
        writeln!(file, "second line is ignored").unwrap();

        assert_eq!(read_token(file.path()).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_token_file_is_fatal() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_token(&dir.path().join("token.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::TokenFile { .. }));
    }

    #[test]
    fn blank_first_line_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        writeln!(file, "token-on-second-line").unwrap();

        assert!(matches!(
            read_token(file.path()),
            Err(ConfigError::EmptyToken(_))
        ));
    }

    #[test]
    fn ids_are_optional_but_must_be_numeric() {
        assert_eq!(parse_id("BOT_OWNER_ID", None).unwrap(), None);
        assert_eq!(parse_id("BOT_OWNER_ID", Some(" ".into())).unwrap(), None);
        assert_eq!(
            parse_id("BOT_OWNER_ID", Some("1148648218658340894".into())).unwrap(),
            Some(1148648218658340894)
        );
        assert!(parse_id("BOT_OWNER_ID", Some("panda".into())).is_err());
        assert!(parse_id("BOT_OWNER_ID", Some("0".into())).is_err());
    }

    #[test]
    fn dev_guild_replaces_global_registration() {
        let mut config = BotConfig {
            token: "t".into(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            owner_id: None,
            dev_guild_id: None,
        };
        assert_eq!(config.registration_scope(), RegistrationScope::Global);

        config.dev_guild_id = Some(1057787637349539890);
        assert_eq!(
            config.registration_scope(),
            RegistrationScope::Guild(1057787637349539890)
        );
    }
}
