//! # Platform Adapters
//!
//! Implementations of `cr-core` ports that live on the platform side.

pub mod in_memory_watcher_control;

pub use in_memory_watcher_control::InMemoryWatcherControl;
