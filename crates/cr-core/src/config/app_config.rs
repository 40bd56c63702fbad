use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub const DEFAULT_MAX_ENTRIES: usize = 500;
pub const DEFAULT_SUPPRESSION_TTL_MS: u64 = 5_000;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub watcher: WatcherConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

/// Clipboard polling configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    /// Polling period in milliseconds
    pub poll_interval_ms: u64,

    /// Counter value the watcher starts from
    pub baseline: ChangeBaseline,
}

/// Where the watcher's change counter starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeBaseline {
    /// Start from the provider's current counter; existing content is not captured.
    #[default]
    Current,
    /// Start from 0; whatever is on the clipboard at startup is captured on the first tick.
    Unset,
}

/// History ring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of entries kept, 0 = unbounded
    pub max_entries: usize,

    /// How long a write-back suppression stays armed, 0 = until consumed
    pub suppression_ttl_ms: u64,

    /// Also clear the system clipboard when the history is cleared
    pub clear_clipboard_on_clear: bool,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            baseline: ChangeBaseline::Current,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            suppression_ttl_ms: DEFAULT_SUPPRESSION_TTL_MS,
            clear_clipboard_on_clear: true,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("watcher.poll_interval_ms must be greater than zero")]
    ZeroPollInterval,

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

impl AppConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.watcher.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

impl WatcherConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl HistoryConfig {
    pub fn max_entries(&self) -> Option<usize> {
        (self.max_entries > 0).then_some(self.max_entries)
    }

    pub fn suppression_ttl(&self) -> Option<Duration> {
        (self.suppression_ttl_ms > 0).then(|| Duration::from_millis(self.suppression_ttl_ms))
    }
}
