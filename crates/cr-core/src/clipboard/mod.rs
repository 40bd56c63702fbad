//! Clipboard state as observed by the core.

/// Point-in-time view of the system clipboard.
///
/// `change_count` is owned by the clipboard provider and changes on every
/// content-affecting write. `text` is `None` when the clipboard holds
/// something that is not text (a file, an image) or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardSnapshot {
    pub change_count: u64,
    pub text: Option<String>,
}

impl ClipboardSnapshot {
    pub fn new(change_count: u64, text: Option<String>) -> Self {
        Self { change_count, text }
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }
}
