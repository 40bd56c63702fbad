//! # cr-app
//!
//! Application layer for ClipRing: the use cases that connect the history
//! ring and suppression latch to the clipboard provider, the presentation
//! observer and the watcher runtime.

pub mod app;
pub mod state;
pub mod usecases;

pub use app::ClipRingApp;
pub use state::{HistoryState, SharedHistoryState};
