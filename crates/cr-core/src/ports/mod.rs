//! Port traits implemented by the platform and app layers.

mod clipboard_provider;
mod clipboard_text_handler;
mod history_observer;
pub mod watcher_control;

pub use clipboard_provider::ClipboardProviderPort;
pub use clipboard_text_handler::ClipboardTextHandler;
pub use history_observer::HistoryObserverPort;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
