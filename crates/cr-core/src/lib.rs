//! # cr-core
//!
//! Core domain models and business logic for ClipRing.
//!
//! This crate contains the history ring, the suppression latch and the port
//! traits the platform and app layers plug into. It performs no I/O.

pub mod clipboard;
pub mod config;
pub mod history;
pub mod ports;
pub mod suppression;

// Re-export commonly used types at the crate root
pub use clipboard::ClipboardSnapshot;
pub use config::{AppConfig, ChangeBaseline, HistoryConfig, WatcherConfig};
pub use history::{HistoryEntry, HistoryRing, InsertOutcome, Slot};
pub use suppression::SuppressionLatch;
