use std::path::PathBuf;

use clap::Parser;
use cr_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "clipring", version, about = "Clipboard history ring with quick-paste slots")]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/clipring/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Clipboard polling period in milliseconds, overrides the file
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,
}

impl Cli {
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(ms) = self.poll_interval_ms {
            config.watcher.poll_interval_ms = ms;
        }
        config
    }
}
