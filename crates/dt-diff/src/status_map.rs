//! Per-path status map: flattens backend change records into tree paths.
//!
//! Change records are rooted at the repository; the map is keyed by
//! tree-relative paths. A rename is shown as a deletion of the old path plus
//! an addition of the new one, never as a single badge.

use std::collections::BTreeMap;

use dt_types::{normalize_path, strip_root, ChangeRecord, PathStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mapping from tree-relative path to display status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMap {
    entries: BTreeMap<String, PathStatus>,
}

impl StatusMap {
    /// Create an empty status map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded for `path`, if any.
    pub fn get(&self, path: &str) -> Option<PathStatus> {
        self.entries.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Record `status` for `path`, returning the status it replaced.
    pub fn insert(&mut self, path: impl Into<String>, status: PathStatus) -> Option<PathStatus> {
        self.entries.insert(path.into(), status)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PathStatus)> {
        self.entries.iter().map(|(p, s)| (p.as_str(), *s))
    }

    /// Number of paths carrying `status`.
    pub fn count(&self, status: PathStatus) -> usize {
        self.entries.values().filter(|s| **s == status).count()
    }
}

impl FromIterator<(String, PathStatus)> for StatusMap {
    fn from_iter<I: IntoIterator<Item = (String, PathStatus)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Build the per-path status map for a list of change records.
///
/// `root` is stripped from both sides of every record when present. Records
/// with no usable path are skipped. When two records produce the same key the
/// later one wins.
pub fn build_status_map(changes: &[ChangeRecord], root: &str) -> StatusMap {
    let mut map = StatusMap::new();

    for record in changes {
        let old_key = tree_key(record.old_path.as_deref(), root);
        let new_key = tree_key(record.new_path.as_deref(), root);

        let entries: Vec<(String, PathStatus)> = match record.status.as_path_status() {
            None => old_key
                .map(|k| (k, PathStatus::Deleted))
                .into_iter()
                .chain(new_key.map(|k| (k, PathStatus::Added)))
                .collect(),
            Some(status) => new_key.or(old_key).map(|k| (k, status)).into_iter().collect(),
        };

        if entries.is_empty() {
            debug!(status = %record.status, "skipping change record without a path");
            continue;
        }

        for (key, status) in entries {
            if let Some(prev) = map.insert(key.clone(), status) {
                debug!(path = %key, %prev, %status, "status overwritten by later change");
            }
        }
    }

    map
}

/// Tree-relative key for one side of a record; `None` when absent or empty.
fn tree_key(path: Option<&str>, root: &str) -> Option<String> {
    let normalized = normalize_path(path?);
    let key = strip_root(&normalized, root);
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
