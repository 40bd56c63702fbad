//! Process wiring and the console command loop.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::Context;
use cr_app::usecases::SelectOutcome;
use cr_app::ClipRingApp;
use cr_core::ports::ClipboardProviderPort;
use cr_core::AppConfig;
use cr_platform::runtime::command_channel;
use cr_platform::{ChangeWatcher, InMemoryWatcherControl, SystemClipboard, WatcherRuntime};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::console::{render, ConsoleCommand, ConsolePresenter, HELP};

const STDIN_CHANNEL_CAPACITY: usize = 8;

/// Run until `quit`, end of input or Ctrl-C.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let clipboard: Arc<dyn ClipboardProviderPort> =
        Arc::new(SystemClipboard::new().context("Failed to open system clipboard")?);

    match clipboard.read_snapshot() {
        Ok(snapshot) => info!(
            change_count = snapshot.change_count,
            has_text = snapshot.has_text(),
            "System clipboard ready"
        ),
        Err(e) => warn!(error = %e, "Failed to read initial clipboard state"),
    }

    let (cmd_tx, cmd_rx) = command_channel();
    let watcher_control = InMemoryWatcherControl::new(cmd_tx);

    let app = ClipRingApp::new(
        &config.history,
        clipboard.clone(),
        Arc::new(ConsolePresenter),
        Arc::new(watcher_control.clone()),
    );

    let watcher = ChangeWatcher::new(clipboard, app.capture_handler(), config.watcher.baseline);
    let runtime = tokio::spawn(
        WatcherRuntime::new(watcher, cmd_rx, config.watcher.poll_interval()).run(),
    );

    app.start_clipboard_watcher()
        .execute()
        .await
        .context("Failed to start clipboard watcher")?;
    info!(
        poll_interval_ms = config.watcher.poll_interval_ms,
        max_entries = config.history.max_entries,
        "ClipRing running"
    );
    println!("{HELP}");

    let result = command_loop(&app).await;

    if let Err(e) = app.stop_clipboard_watcher().execute().await {
        warn!(error = %e, "Failed to stop clipboard watcher");
    }
    if let Err(e) = watcher_control.shutdown().await {
        warn!(error = %e, "Failed to shut down watcher runtime");
    }
    if let Err(e) = runtime.await {
        error!(error = %e, "Watcher runtime task failed");
    }

    info!("ClipRing stopped");
    result
}

async fn command_loop(app: &ClipRingApp) -> anyhow::Result<()> {
    let mut lines = spawn_stdin_reader();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    info!("Console input closed");
                    return Ok(());
                };
                match line.parse::<ConsoleCommand>() {
                    Ok(ConsoleCommand::Quit) => return Ok(()),
                    Ok(command) => {
                        if let Err(e) = handle_command(app, command).await {
                            error!(error = %e, ?command, "Command failed");
                            eprintln!("error: {e:#}");
                        }
                    }
                    Err(e) => println!("{e}\n{HELP}"),
                }
            }
            signal = &mut ctrl_c => {
                signal.context("Failed to listen for Ctrl-C")?;
                info!("Interrupted");
                return Ok(());
            }
        }
    }
}

async fn handle_command(app: &ClipRingApp, command: ConsoleCommand) -> anyhow::Result<()> {
    match command {
        ConsoleCommand::List => print!("{}", render(&app.list_history().execute().await)),
        ConsoleCommand::Select(index) => {
            let outcome = app.select_history_entry().execute(index).await?;
            if outcome == SelectOutcome::NotFound {
                println!("no entry at index {index}");
            }
        }
        ConsoleCommand::Slot(slot) => {
            let outcome = app.select_history_entry().execute_slot(slot).await?;
            if outcome == SelectOutcome::NotFound {
                println!("slot {slot} is not assigned");
            }
        }
        ConsoleCommand::Clear => app.clear_history().execute().await?,
        ConsoleCommand::Help => println!("{HELP}"),
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

/// Forward stdin lines from a plain thread.
///
/// A blocking read cannot be cancelled, so it stays off the runtime to keep
/// shutdown from waiting on the next keystroke.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(STDIN_CHANNEL_CAPACITY);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}
