//! ClipRing - clipboard history ring with quick-paste slots.

mod bootstrap;
mod cli;
mod console;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep running without logs rather than refuse to start.
    if let Err(e) = bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let config = bootstrap::resolve_config(cli.config.as_deref(), bootstrap::default_config_path())?;
    let config = cli.apply_overrides(config);
    config.validate()?;

    bootstrap::run_app(config).await
}
