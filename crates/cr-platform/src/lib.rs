//! # cr-platform
//!
//! Platform-specific implementations for ClipRing.
//!
//! This crate contains the adapters that touch the operating system clipboard
//! and the tokio runtime that drives the polling watcher.

pub mod adapters;
pub mod clipboard;
pub mod ipc;
pub mod runtime;

pub use adapters::InMemoryWatcherControl;
pub use clipboard::{ChangeWatcher, InMemoryClipboard, SystemClipboard, TickOutcome};
pub use runtime::WatcherRuntime;
