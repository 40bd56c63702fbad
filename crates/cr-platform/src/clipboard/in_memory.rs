use std::sync::{Mutex, MutexGuard};

use anyhow::Result;
use cr_core::ports::ClipboardProviderPort;

/// In-process clipboard with a real change counter.
///
/// Stands in for the OS clipboard in tests and headless hosts. The
/// `simulate_*` methods model copies made by other applications; writes
/// through the port model our own write-back. Both bump the counter.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    change_count: u64,
    text: Option<String>,
    writes: Vec<String>,
    clears: usize,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard that already holds `text` with a non-zero counter, as if it
    /// had been copied before the program started.
    pub fn with_text(text: impl Into<String>) -> Self {
        let clipboard = Self::new();
        clipboard.simulate_copy(text);
        clipboard
    }

    /// Another application copied `text`.
    pub fn simulate_copy(&self, text: impl Into<String>) {
        let mut state = self.state();
        state.text = Some(text.into());
        state.change_count += 1;
    }

    /// Another application copied something that is not text.
    pub fn simulate_non_text_copy(&self) {
        let mut state = self.state();
        state.text = None;
        state.change_count += 1;
    }

    /// Values written through [`ClipboardProviderPort::write_text`], oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.state().writes.clone()
    }

    pub fn clear_count(&self) -> usize {
        self.state().clears
    }

    pub fn current_text(&self) -> Option<String> {
        self.state().text.clone()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ClipboardProviderPort for InMemoryClipboard {
    fn read_change_count(&self) -> Result<u64> {
        Ok(self.state().change_count)
    }

    fn read_text(&self) -> Result<Option<String>> {
        Ok(self.state().text.clone())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut state = self.state();
        state.text = Some(text.to_owned());
        state.writes.push(text.to_owned());
        state.change_count += 1;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut state = self.state();
        state.text = None;
        state.clears += 1;
        state.change_count += 1;
        Ok(())
    }
}
