pub mod capture_clipboard_text;
pub mod clear_history;
pub mod list_history;
pub mod select_history_entry;
pub mod start_clipboard_watcher;
pub mod stop_clipboard_watcher;

pub use capture_clipboard_text::{CaptureClipboardText, CaptureOutcome};
pub use clear_history::ClearHistory;
pub use list_history::ListHistory;
pub use select_history_entry::{SelectHistoryEntry, SelectOutcome};
pub use start_clipboard_watcher::{StartClipboardWatcher, StartClipboardWatcherError};
pub use stop_clipboard_watcher::{StopClipboardWatcher, StopClipboardWatcherError};

#[cfg(test)]
pub(crate) mod test_support;
