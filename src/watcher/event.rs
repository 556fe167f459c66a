//! Watch event types

use std::path::Path;

use crate::build::BuildReport;

use super::snapshot::ChangeSet;

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        source: String,
    },
    ChangeDetected {
        added: Vec<String>,
        removed: Vec<String>,
        modified: Vec<String>,
    },
    BuildStarted,
    BuildComplete {
        output: String,
        bytes: u64,
        includes: usize,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub(crate) fn started(source: &Path) -> Self {
        WatchEvent::WatchStarted {
            source: source.display().to_string(),
        }
    }
}

impl From<&ChangeSet> for WatchEvent {
    fn from(changes: &ChangeSet) -> Self {
        let render = |paths: &[std::path::PathBuf]| {
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
        };
        WatchEvent::ChangeDetected {
            added: render(&changes.added),
            removed: render(&changes.removed),
            modified: render(&changes.modified),
        }
    }
}

impl From<&BuildReport> for WatchEvent {
    fn from(report: &BuildReport) -> Self {
        WatchEvent::BuildComplete {
            output: report.output.display().to_string(),
            bytes: report.bytes,
            includes: report.includes,
        }
    }
}
