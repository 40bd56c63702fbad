//! Clipboard text handler port
//!
//! The watcher calls this with the text it found after observing a change.
//! The app layer implements it: it decides whether the text is dropped by the
//! suppression latch or recorded in the history.

use anyhow::Result;

#[async_trait::async_trait]
pub trait ClipboardTextHandler: Send + Sync {
    async fn deliver(&self, text: String) -> Result<()>;
}
