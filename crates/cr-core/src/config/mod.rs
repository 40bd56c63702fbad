//! Application configuration domain model
//!
//! Pure data plus validation. Reading the file from disk is the binary's job.

mod app_config;

pub use app_config::{
    AppConfig, ChangeBaseline, ConfigError, HistoryConfig, WatcherConfig,
    DEFAULT_MAX_ENTRIES, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SUPPRESSION_TTL_MS,
};
