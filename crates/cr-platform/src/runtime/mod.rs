mod event_bus;
mod watcher_runtime;

pub use event_bus::{command_channel, PlatformCommandReceiver, PlatformCommandSender};
pub use watcher_runtime::WatcherRuntime;
