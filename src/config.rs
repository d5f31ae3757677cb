//! Game configuration
//!
//! Word length and attempt limit, loadable from a TOML file. Missing keys
//! fall back to the classic board: 5 letters, 5 attempts.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default attempts per round
pub const DEFAULT_ATTEMPTS: usize = 5;

/// Board dimensions for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub word_length: usize,
    pub attempts_allowed: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            attempts_allowed: DEFAULT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Load from a TOML file and validate
    ///
    /// # Errors
    /// Returns `ConfigError` if the file can't be read, doesn't parse, or
    /// holds a zero value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse from TOML text without validating
    ///
    /// # Errors
    /// Returns the TOML error on malformed input or unknown keys.
    ///
    /// # Examples
    /// ```
    /// use wordle_round::config::GameConfig;
    ///
    /// let config = GameConfig::from_toml("attempts_allowed = 6").unwrap();
    /// assert_eq!(config.word_length, 5);
    /// assert_eq!(config.attempts_allowed, 6);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(self, word_length: Option<usize>, attempts: Option<usize>) -> Self {
        Self {
            word_length: word_length.unwrap_or(self.word_length),
            attempts_allowed: attempts.unwrap_or(self.attempts_allowed),
        }
    }

    /// Check that both dimensions are non-zero
    ///
    /// # Errors
    /// Returns `ConfigError::Zero` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::Zero {
                field: "word_length",
            });
        }
        if self.attempts_allowed == 0 {
            return Err(ConfigError::Zero {
                field: "attempts_allowed",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.attempts_allowed, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = GameConfig::from_toml("word_length = 6\nattempts_allowed = 7\n").unwrap();
        assert_eq!(config.word_length, 6);
        assert_eq!(config.attempts_allowed, 7);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(GameConfig::from_toml("lives = 3").is_err());
    }

    #[test]
    fn zero_values_rejected() {
        let config = GameConfig::default().with_overrides(None, Some(0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Zero {
                field: "attempts_allowed"
            })
        ));

        let config = GameConfig::default().with_overrides(Some(0), None);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Zero {
                field: "word_length"
            })
        ));
    }

    #[test]
    fn overrides_only_replace_given_values() {
        let config = GameConfig::default().with_overrides(Some(6), None);
        assert_eq!(config.word_length, 6);
        assert_eq!(config.attempts_allowed, DEFAULT_ATTEMPTS);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "attempts_allowed = 3").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.attempts_allowed, 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.toml"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn load_zero_attempts_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "attempts_allowed = 0").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::Zero { .. })
        ));
    }
}
