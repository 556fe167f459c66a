//! Property tests for snapshot diffing.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use stitch::Snapshot;

fn entries() -> impl Strategy<Value = BTreeMap<PathBuf, u64>> {
    proptest::collection::btree_map(
        proptest::string::string_regex("[a-c]{1,3}\\.html")
            .unwrap()
            .prop_map(PathBuf::from),
        0u64..4,
        0..8,
    )
}

fn snapshot(entries: &BTreeMap<PathBuf, u64>) -> Snapshot {
    entries
        .iter()
        .map(|(path, secs)| {
            (
                path.clone(),
                SystemTime::UNIX_EPOCH + Duration::from_secs(*secs),
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A snapshot never differs from itself.
    #[test]
    fn property_self_diff_is_empty(a in entries()) {
        let snap = snapshot(&a);
        prop_assert!(snap.diff(&snap).is_empty());
    }

    /// PROPERTY: Every path lands in exactly the bucket its presence and timestamp imply.
    #[test]
    fn property_diff_classifies_every_path(a in entries(), b in entries()) {
        let changes = snapshot(&a).diff(&snapshot(&b));

        let added: Vec<PathBuf> = b.keys().filter(|p| !a.contains_key(*p)).cloned().collect();
        let removed: Vec<PathBuf> = a.keys().filter(|p| !b.contains_key(*p)).cloned().collect();
        let modified: Vec<PathBuf> = a
            .iter()
            .filter(|(p, t)| b.get(*p).is_some_and(|u| u != *t))
            .map(|(p, _)| p.clone())
            .collect();

        prop_assert_eq!(&changes.added, &added);
        prop_assert_eq!(&changes.removed, &removed);
        prop_assert_eq!(&changes.modified, &modified);
        prop_assert_eq!(changes.is_empty(), added.is_empty() && removed.is_empty() && modified.is_empty());
    }
}
