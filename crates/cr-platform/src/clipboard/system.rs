//! System clipboard adapter backed by `arboard`.
//!
//! `arboard` exposes no change counter; [`ChangeTracker`] supplies one from
//! the OS where available and from a text fingerprint elsewhere.

use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use cr_core::ports::ClipboardProviderPort;
use tracing::debug;

use super::change_tracker::ChangeTracker;
use super::native;

pub struct SystemClipboard {
    inner: Mutex<Inner>,
}

struct Inner {
    clipboard: Clipboard,
    tracker: ChangeTracker,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to open system clipboard")?;
        let native = native::platform_change_count();
        debug!(native_counter = native.is_some(), "System clipboard opened");

        Ok(Self {
            inner: Mutex::new(Inner {
                clipboard,
                tracker: ChangeTracker::new(native),
            }),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("system clipboard lock poisoned"))
    }
}

fn read_text(clipboard: &mut Clipboard) -> Result<Option<String>> {
    match clipboard.get_text() {
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(anyhow!(e).context("Failed to read clipboard text")),
    }
}

impl ClipboardProviderPort for SystemClipboard {
    fn read_change_count(&self) -> Result<u64> {
        let mut inner = self.lock()?;
        let Inner { clipboard, tracker } = &mut *inner;
        tracker.observe(|| read_text(clipboard))
    }

    fn read_text(&self) -> Result<Option<String>> {
        read_text(&mut self.lock()?.clipboard)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut inner = self.lock()?;
        inner
            .clipboard
            .set_text(text.to_owned())
            .map_err(|e| anyhow!(e).context("Failed to write clipboard text"))?;
        inner.tracker.record_own_change(Some(text));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut inner = self.lock()?;
        inner
            .clipboard
            .clear()
            .map_err(|e| anyhow!(e).context("Failed to clear clipboard"))?;
        inner.tracker.record_own_change(None);
        Ok(())
    }
}
