//! Upward change propagation: which folders contain a changed file.

use std::collections::BTreeSet;

use dt_types::TreeNode;
use serde::{Deserialize, Serialize};

use crate::status_map::StatusMap;

/// Folder paths with at least one changed descendant, at any depth.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangedFolderSet {
    paths: BTreeSet<String>,
}

impl ChangedFolderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Folder paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ChangedFolderSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Collect every folder in `tree` that has a changed file beneath it.
///
/// A file is changed when its path is a key of `status_map`. A folder's own
/// entry in the map (if any) does not mark it or its parents as changed; only
/// files propagate. This differs from decorators that treat a folder-level
/// entry, such as a submodule git reports as modified, as a change of its
/// parents: here that folder only receives its own badge through
/// [`TreeStatus::decoration`](crate::TreeStatus::decoration). Each node is
/// visited once.
pub fn compute_changed_folders(tree: &[TreeNode], status_map: &StatusMap) -> ChangedFolderSet {
    let mut out = ChangedFolderSet::new();
    if status_map.is_empty() {
        return out;
    }
    for node in tree {
        visit(node, status_map, &mut out.paths);
    }
    out
}

/// Returns whether `node`'s subtree contains a changed file.
fn visit(node: &TreeNode, status_map: &StatusMap, out: &mut BTreeSet<String>) -> bool {
    match node {
        TreeNode::File { path, .. } => status_map.contains(path),
        TreeNode::Folder { path, children, .. } => {
            let mut changed = false;
            // Every child must be visited so nested folders are recorded too.
            for child in children {
                changed |= visit(child, status_map, out);
            }
            if changed {
                out.insert(path.clone());
            }
            changed
        }
    }
}
