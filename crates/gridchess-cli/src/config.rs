//! Host configuration loaded from a TOML file.

use gridchess_engine::Rules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for a play session.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HostConfig {
    /// Movement rules: `"classic"` or `"strict"`.
    pub rules: Rules,
    /// Reject moves by the side that is not to move.
    pub enforce_turns: bool,
    /// Where `save` and `load` read and write.
    pub save_file: PathBuf,
    /// Save automatically on `quit`.
    pub autosave: bool,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            rules: Rules::Classic,
            enforce_turns: false,
            save_file: PathBuf::from("chess_save.json"),
            autosave: true,
            log_level: "warn".to_string(),
        }
    }
}

impl HostConfig {
    /// Default configuration file name, looked up in the working directory.
    pub const DEFAULT_PATH: &'static str = "gridchess.toml";

    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: HostConfig = toml::from_str(
            r#"
rules = "strict"
enforce_turns = true
save_file = "saves/game.json"
autosave = false
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.rules, Rules::Strict);
        assert!(config.enforce_turns);
        assert_eq!(config.save_file, PathBuf::from("saves/game.json"));
        assert!(!config.autosave);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: HostConfig = toml::from_str("enforce_turns = true").unwrap();
        assert_eq!(config.rules, Rules::Classic);
        assert!(config.enforce_turns);
        assert_eq!(config.save_file, PathBuf::from("chess_save.json"));
        assert!(config.autosave);
    }

    #[test]
    fn unknown_rules_are_rejected() {
        assert!(toml::from_str::<HostConfig>(r#"rules = "fide""#).is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gridchess.toml");
        std::fs::write(&path, "rules = \"strict\"\n").unwrap();
        assert_eq!(HostConfig::load(&path).unwrap().rules, Rules::Strict);

        std::fs::write(&path, "rules = [").unwrap();
        assert!(matches!(
            HostConfig::load(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
