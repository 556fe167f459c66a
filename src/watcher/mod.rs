//! Polling watcher for continuous rebuilds
//!
//! Implements `--watch` with:
//! - Modification-time snapshots of every tracked document under `src/`
//! - A fixed poll interval (500ms by default)
//! - Rebuild on modify, add or remove
//! - Graceful Ctrl+C shutdown
//! - NDJSON events for CI

mod event;
mod poll;
mod snapshot;

pub use event::WatchEvent;
pub use poll::{watch, Poller};
pub use snapshot::{source_tree, ChangeSet, Snapshot};
