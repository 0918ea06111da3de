//! TOML-based application configuration.
//!
//! Stores user preferences for suggestion defaults and mood reminders.
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Suggestion defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    /// How many suggestions a cycle surfaces by default.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

/// Mood logging preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MoodConfig {
    /// Local hour (0-23) at which clients nudge for a mood log, if set.
    #[serde(default)]
    pub reminder_hour: Option<u32>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub mood: MoodConfig,
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestions: SuggestionsConfig::default(),
            mood: MoodConfig::default(),
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<data_dir>"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::LoadFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Save the config.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let text = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, text).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Read a value by dotted key, for the CLI `config get` command.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "suggestions.max_suggestions" => Ok(self.suggestions.max_suggestions.to_string()),
            "mood.reminder_hour" => Ok(self
                .mood
                .reminder_hour
                .map(|h| h.to_string())
                .unwrap_or_else(|| "unset".to_string())),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Write a value by dotted key, for the CLI `config set` command.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "suggestions.max_suggestions" => {
                let parsed: usize = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("'{value}' is not a positive integer"),
                })?;
                if parsed == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "must be at least 1".to_string(),
                    });
                }
                self.suggestions.max_suggestions = parsed;
            }
            "mood.reminder_hour" => {
                if value == "unset" {
                    self.mood.reminder_hour = None;
                } else {
                    let parsed: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("'{value}' is not an hour"),
                    })?;
                    if parsed > 23 {
                        return Err(ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: "hour must be 0-23".to_string(),
                        });
                    }
                    self.mood.reminder_hour = Some(parsed);
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// All dotted keys and their current values, for `config list`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "suggestions.max_suggestions",
                self.suggestions.max_suggestions.to_string(),
            ),
            (
                "mood.reminder_hour",
                self.mood
                    .reminder_hour
                    .map(|h| h.to_string())
                    .unwrap_or_else(|| "unset".to_string()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.suggestions.max_suggestions, 5);
        assert_eq!(config.mood.reminder_hour, None);
    }

    #[test]
    fn dotted_get_set() {
        let mut config = Config::default();
        config.set("suggestions.max_suggestions", "3").unwrap();
        assert_eq!(config.get("suggestions.max_suggestions").unwrap(), "3");
        config.set("mood.reminder_hour", "20").unwrap();
        assert_eq!(config.get("mood.reminder_hour").unwrap(), "20");
        config.set("mood.reminder_hour", "unset").unwrap();
        assert_eq!(config.get("mood.reminder_hour").unwrap(), "unset");
    }

    #[test]
    fn rejects_bad_values_and_keys() {
        let mut config = Config::default();
        assert!(config.set("suggestions.max_suggestions", "0").is_err());
        assert!(config.set("suggestions.max_suggestions", "abc").is_err());
        assert!(config.set("mood.reminder_hour", "24").is_err());
        assert!(config.set("nope.nothing", "1").is_err());
        assert!(config.get("nope.nothing").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.suggestions.max_suggestions = 7;
        config.mood.reminder_hour = Some(9);
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.suggestions.max_suggestions, 7);
        assert_eq!(parsed.mood.reminder_hour, Some(9));
    }
}
