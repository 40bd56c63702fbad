//! Clipboard port - abstracts the system clipboard
//!
//! The OS clipboard is treated as an opaque text slot with a change counter.
//! Implementations must make the counter change on every content-affecting
//! write, including writes made through this port.

use anyhow::Result;

use crate::clipboard::ClipboardSnapshot;

pub trait ClipboardProviderPort: Send + Sync {
    /// Current value of the change counter.
    fn read_change_count(&self) -> Result<u64>;

    /// Current clipboard text, `None` when the content is not text.
    fn read_text(&self) -> Result<Option<String>>;

    /// Replace the clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<()>;

    /// Remove all clipboard content.
    fn clear(&self) -> Result<()>;

    /// Counter and text read back to back.
    fn read_snapshot(&self) -> Result<ClipboardSnapshot> {
        let change_count = self.read_change_count()?;
        let text = self.read_text()?;
        Ok(ClipboardSnapshot { change_count, text })
    }
}
