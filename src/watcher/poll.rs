//! Polling watch loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::build::build;
use crate::config::BuildConfig;

use super::event::WatchEvent;
use super::snapshot::{ChangeSet, Snapshot};

/// Holds the baseline snapshot and decides, one tick at a time, whether the
/// source tree changed.
#[derive(Debug)]
pub struct Poller {
    config: BuildConfig,
    baseline: Snapshot,
}

impl Poller {
    /// Capture the initial baseline.
    pub fn new(config: BuildConfig) -> Self {
        let baseline = Snapshot::capture(&config);
        Self { config, baseline }
    }

    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    /// Take a fresh snapshot and compare it with the baseline.
    ///
    /// On change the fresh snapshot becomes the baseline, whatever the
    /// outcome of the rebuild that follows.
    pub fn poll(&mut self) -> Option<ChangeSet> {
        let current = Snapshot::capture(&self.config);
        let changes = self.baseline.diff(&current);
        if changes.is_empty() {
            return None;
        }
        self.baseline = current;
        Some(changes)
    }
}

/// Poll the source tree until `running` is cleared, rebuilding on change.
///
/// Rebuild failures are reported through `on_event` and never end the loop.
pub fn watch(config: &BuildConfig, running: Arc<AtomicBool>, on_event: impl Fn(WatchEvent)) {
    on_event(WatchEvent::started(&config.source_root));

    let mut poller = Poller::new(config.clone());

    while running.load(Ordering::SeqCst) {
        thread::sleep(config.poll_interval);
        if !running.load(Ordering::SeqCst) {
            break;
        }

        if let Some(changes) = poller.poll() {
            on_event(WatchEvent::from(&changes));
            rebuild(config, &on_event);
        }
    }

    on_event(WatchEvent::Shutdown);
}

fn rebuild(config: &BuildConfig, on_event: &impl Fn(WatchEvent)) {
    on_event(WatchEvent::BuildStarted);

    match build(config) {
        Ok(report) => on_event(WatchEvent::from(&report)),
        Err(e) => on_event(WatchEvent::Error {
            message: e.to_string(),
        }),
    }
}
