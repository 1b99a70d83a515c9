//! Configuration file support for the contacts assistant.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/contacts/config.toml`.

use crate::birthdays::{BirthdayWindow, LeapDayPolicy, DEFAULT_WINDOW_DAYS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest accepted look-ahead; one year plus a leap day
const MAX_WINDOW_DAYS: u32 = 366;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub birthdays: BirthdaysConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upcoming-birthdays query configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BirthdaysConfig {
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    #[serde(default)]
    pub leap_day: LeapDayPolicy,
}

impl Default for BirthdaysConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            leap_day: LeapDayPolicy::default(),
        }
    }
}

impl BirthdaysConfig {
    pub fn window(&self) -> BirthdayWindow {
        BirthdayWindow {
            days: self.window_days,
            leap_day: self.leap_day,
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("contacts").join("config.toml"))
    }

    /// Check values that parse but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.birthdays.window_days > MAX_WINDOW_DAYS {
            return Err(Error::Config(format!(
                "birthdays.window_days must be at most {}, got {}",
                MAX_WINDOW_DAYS, self.birthdays.window_days
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::Config("logging.level cannot be empty".into()));
        }
        Ok(())
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path()
            .ok_or_else(|| Error::Config("No config directory available".into()))?;
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.birthdays.window_days, 7);
        assert_eq!(config.birthdays.leap_day, LeapDayPolicy::March1);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.birthdays.window(), BirthdayWindow::default());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.birthdays.leap_day = LeapDayPolicy::February28;
        config.birthdays.window_days = 10;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.birthdays.window_days, 10);
        assert_eq!(loaded.birthdays.leap_day, LeapDayPolicy::February28);
        assert_eq!(loaded.logging.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[birthdays]
leap_day = "february28"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.birthdays.leap_day, LeapDayPolicy::February28);
        assert_eq!(config.birthdays.window_days, 7); // default
        assert_eq!(config.logging.level, "warn"); // default
    }

    #[test]
    fn test_invalid_window_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[birthdays]\nwindow_days = 400\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_leap_policy_is_a_toml_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[birthdays]\nleap_day = \"never\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
