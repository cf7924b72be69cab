//! Tree narrowing: path filters and sidebar visibility rules.

use std::collections::BTreeSet;

use dt_types::TreeNode;
use serde::{Deserialize, Serialize};

/// Keep only files whose path is in `paths`, and the folders leading to them.
///
/// Folders left without children are dropped. This shapes the union tree of
/// a commit comparison and the changed-files-only local tree.
pub fn filter_to_paths(tree: &[TreeNode], paths: &BTreeSet<String>) -> Vec<TreeNode> {
    tree.iter()
        .filter_map(|node| match node {
            TreeNode::File { path, .. } => paths.contains(path).then(|| node.clone()),
            TreeNode::Folder { name, path, children } => {
                let kept = filter_to_paths(children, paths);
                (!kept.is_empty()).then(|| TreeNode::folder(name.clone(), path.clone(), kept))
            }
        })
        .collect()
}

/// Which folders the sidebar shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityRules {
    /// Folder names never shown.
    pub ignored_folders: Vec<String>,
    /// Hide folders whose name starts with `.` or `_` outside the diff view.
    pub hide_prefixed: bool,
}

impl Default for VisibilityRules {
    fn default() -> Self {
        Self {
            ignored_folders: vec![
                "_static".to_string(),
                "_templates".to_string(),
                ".obsidian".to_string(),
            ],
            hide_prefixed: true,
        }
    }
}

impl VisibilityRules {
    /// Whether a folder named `name` is shown.
    pub fn shows_folder(&self, name: &str, diff_active: bool) -> bool {
        if self.ignored_folders.iter().any(|f| f == name) {
            return false;
        }
        if self.hide_prefixed && !diff_active && (name.starts_with('.') || name.starts_with('_')) {
            return false;
        }
        true
    }
}

/// Apply `rules` at every level of `tree`. Files are always shown.
pub fn visible_nodes(tree: &[TreeNode], rules: &VisibilityRules, diff_active: bool) -> Vec<TreeNode> {
    tree.iter()
        .filter_map(|node| match node {
            TreeNode::File { .. } => Some(node.clone()),
            TreeNode::Folder { name, path, children } => rules
                .shows_folder(name, diff_active)
                .then(|| TreeNode::folder(name.clone(), path.clone(), visible_nodes(children, rules, diff_active))),
        })
        .collect()
}
