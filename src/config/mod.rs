//! Timer configuration.
//!
//! Settings are read from a JSON file. Every field is optional; missing
//! fields take their defaults. The default location is
//! `<config_dir>/pomodoro-timer/config.json`.
//!
//! ```
//! use pomodoro_timer::config::TimerConfig;
//!
//! let config = TimerConfig::default();
//! assert_eq!(config.default_minutes, 3);
//! assert_eq!(config.default_seconds, 30);
//! assert_eq!(config.tick_interval_ms, 1000);
//! ```

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::engine::WarningMode;
use crate::types::{CountdownDuration, MAX_COMPONENT};

pub use self::error::ConfigError;

const APP_DIR_NAME: &str = "pomodoro-timer";
const CONFIG_FILE_NAME: &str = "config.json";

fn default_minutes() -> u32 {
    3
}

fn default_seconds() -> u32 {
    30
}

fn default_tick_interval_ms() -> u64 {
    1000
}

/// Countdown settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Minutes of the initial configured duration (0-59)
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,

    /// Seconds of the initial configured duration (0-59)
    #[serde(default = "default_seconds")]
    pub default_seconds: u32,

    /// Milliseconds per tick
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Which seconds produce a Warning
    #[serde(default)]
    pub warning_mode: WarningMode,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
            default_seconds: default_seconds(),
            tick_interval_ms: default_tick_interval_ms(),
            warning_mode: WarningMode::default(),
        }
    }
}

impl TimerConfig {
    /// Sets the initial configured duration.
    #[must_use]
    pub fn with_duration(mut self, minutes: u32, seconds: u32) -> Self {
        self.default_minutes = minutes;
        self.default_seconds = seconds;
        self
    }

    /// Sets the tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, millis: u64) -> Self {
        self.tick_interval_ms = millis;
        self
    }

    /// Sets the warning mode.
    #[must_use]
    pub fn with_warning_mode(mut self, mode: WarningMode) -> Self {
        self.warning_mode = mode;
        self
    }

    /// Initial configured duration, clamped to [0, 59] per component.
    pub fn duration(&self) -> CountdownDuration {
        CountdownDuration::new(self.default_minutes, self.default_seconds)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_minutes > MAX_COMPONENT {
            return Err(ConfigError::Invalid(format!(
                "default_minutes must be 0-{}, got {}",
                MAX_COMPONENT, self.default_minutes
            )));
        }
        if self.default_seconds > MAX_COMPONENT {
            return Err(ConfigError::Invalid(format!(
                "default_seconds must be 0-{}, got {}",
                MAX_COMPONENT, self.default_seconds
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Default config file location, if a config directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
