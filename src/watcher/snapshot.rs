//! Source tree enumeration and modification-time snapshots

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use ignore::WalkBuilder;

use crate::config::BuildConfig;

/// Every tracked document under the source root, as paths relative to it.
///
/// A missing source root yields an empty tree.
pub fn source_tree(config: &BuildConfig) -> Vec<PathBuf> {
    let root = &config.source_root;
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    walker
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter(|entry| config.is_tracked(entry.path()))
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}

/// Path → modification time, captured once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<PathBuf, SystemTime>,
}

impl Snapshot {
    /// Stat every document in the source tree.
    ///
    /// Documents that vanish between listing and stat are left out.
    pub fn capture(config: &BuildConfig) -> Self {
        let entries = source_tree(config)
            .into_iter()
            .filter_map(|rel| {
                let modified = config
                    .source_root
                    .join(&rel)
                    .metadata()
                    .and_then(|m| m.modified())
                    .ok()?;
                Some((rel, modified))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compare against a later snapshot.
    pub fn diff(&self, newer: &Snapshot) -> ChangeSet {
        let mut changes = ChangeSet::default();

        for (path, modified) in &newer.entries {
            match self.entries.get(path) {
                None => changes.added.push(path.clone()),
                Some(old) if old != modified => changes.modified.push(path.clone()),
                Some(_) => {}
            }
        }
        changes.removed = self
            .entries
            .keys()
            .filter(|path| !newer.entries.contains_key(*path))
            .cloned()
            .collect();

        changes
    }
}

impl FromIterator<(PathBuf, SystemTime)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (PathBuf, SystemTime)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Differences between two snapshots, each list sorted by path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }
}
