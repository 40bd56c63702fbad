mod change_tracker;
mod in_memory;
mod native;
mod system;
mod watcher;

pub use in_memory::InMemoryClipboard;
pub use system::SystemClipboard;
pub use watcher::{ChangeWatcher, TickOutcome};
