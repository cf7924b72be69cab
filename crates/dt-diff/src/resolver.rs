//! The tree status resolver: status map plus changed folders in one call.
//!
//! The resolver is a pure, synchronous computation run after every tree
//! fetch. It holds only configuration; nothing is cached between calls.

use dt_types::{ChangeRecord, ChangeStatus, PathStatus, TreeNode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::changed_folders::{compute_changed_folders, ChangedFolderSet};
use crate::status_map::{build_status_map, StatusMap};

/// Configuration for [`TreeStatusResolver`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Repository-relative prefix of the documentation tree, stripped from
    /// change paths.
    pub tree_root: String,
    /// Drop deleted records before resolving. Used by the local tree view,
    /// where deleted files no longer appear.
    pub hide_deleted: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tree_root: "docs/".to_string(),
            hide_deleted: false,
        }
    }
}

/// Resolves change records against a file tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStatusResolver {
    config: ResolverConfig,
}

impl TreeStatusResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Build the status map and changed-folder set for `tree`.
    pub fn resolve(&self, tree: &[TreeNode], changes: &[ChangeRecord]) -> TreeStatus {
        let status_map = if self.config.hide_deleted {
            let kept: Vec<ChangeRecord> = changes
                .iter()
                .filter(|c| c.status != ChangeStatus::Deleted)
                .cloned()
                .collect();
            build_status_map(&kept, &self.config.tree_root)
        } else {
            build_status_map(changes, &self.config.tree_root)
        };
        let changed_folders = compute_changed_folders(tree, &status_map);

        debug!(
            records = changes.len(),
            paths = status_map.len(),
            folders = changed_folders.len(),
            "resolved tree status"
        );

        TreeStatus {
            status_map,
            changed_folders,
        }
    }

    /// Resolve a comparison between two commits.
    ///
    /// Comparing a commit with itself has no changes, so `fetch` is only
    /// called when `left != right`.
    pub fn resolve_range<F, E>(
        &self,
        left: &str,
        right: &str,
        tree: &[TreeNode],
        fetch: F,
    ) -> Result<TreeStatus, E>
    where
        F: FnOnce() -> Result<Vec<ChangeRecord>, E>,
    {
        if left == right {
            debug!(commit = left, "identical commits, skipping diff");
            return Ok(self.resolve(tree, &[]));
        }
        let changes = fetch()?;
        Ok(self.resolve(tree, &changes))
    }
}

/// Resolved status of a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStatus {
    pub status_map: StatusMap,
    pub changed_folders: ChangedFolderSet,
}

impl TreeStatus {
    /// Decoration for the node at `path`.
    pub fn decoration(&self, path: &str) -> NodeDecoration {
        NodeDecoration {
            status: self.status_map.get(path),
            changed_path: self.changed_folders.contains(path),
        }
    }

    pub fn summary(&self) -> StatusSummary {
        StatusSummary {
            added: self.status_map.count(PathStatus::Added),
            deleted: self.status_map.count(PathStatus::Deleted),
            modified: self.status_map.count(PathStatus::Modified),
            changed_folders: self.changed_folders.len(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.status_map.is_empty()
    }
}

/// How a renderer decorates a single node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDecoration {
    /// The node's own status badge.
    pub status: Option<PathStatus>,
    /// The node is a folder containing a changed file.
    pub changed_path: bool,
}

impl NodeDecoration {
    /// CSS classes for the node label, badge first.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if let Some(status) = self.status {
            classes.push(status.css_class());
        }
        if self.changed_path {
            classes.push("changed-path");
        }
        classes
    }
}

/// Counts of changed paths by status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub added: usize,
    pub deleted: usize,
    pub modified: usize,
    pub changed_folders: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<TreeNode> {
        vec![
            TreeNode::folder(
                "guide",
                "guide",
                vec![
                    TreeNode::file("intro.md", "guide/intro.md"),
                    TreeNode::file("setup.md", "guide/setup.md"),
                ],
            ),
            TreeNode::folder("api", "api", vec![TreeNode::file("ref.md", "api/ref.md")]),
            TreeNode::file("index.md", "index.md"),
        ]
    }

    #[test]
    fn default_config() {
        let c = ResolverConfig::default();
        assert_eq!(c.tree_root, "docs/");
        assert!(!c.hide_deleted);
    }

    #[test]
    fn resolve_strips_configured_root() {
        let resolver = TreeStatusResolver::default();
        let status = resolver.resolve(
            &tree(),
            &[
                ChangeRecord::modified("docs/guide/intro.md"),
                ChangeRecord::added("docs/index.md"),
            ],
        );
        assert_eq!(status.status_map.get("guide/intro.md"), Some(PathStatus::Modified));
        assert_eq!(status.status_map.get("index.md"), Some(PathStatus::Added));
        assert!(status.changed_folders.contains("guide"));
        assert!(!status.changed_folders.contains("api"));
    }

    #[test]
    fn hide_deleted_drops_deletions() {
        let resolver = TreeStatusResolver::new(ResolverConfig {
            hide_deleted: true,
            ..Default::default()
        });
        let status = resolver.resolve(
            &tree(),
            &[
                ChangeRecord::deleted("docs/api/ref.md"),
                ChangeRecord::modified("docs/guide/setup.md"),
            ],
        );
        assert_eq!(status.status_map.len(), 1);
        assert!(!status.changed_folders.contains("api"));
        assert!(status.changed_folders.contains("guide"));
    }

    #[test]
    fn hide_deleted_keeps_rename_expansion() {
        let resolver = TreeStatusResolver::new(ResolverConfig {
            hide_deleted: true,
            ..Default::default()
        });
        let status = resolver.resolve(&tree(), &[ChangeRecord::renamed("docs/api/ref.md", "docs/api/reference.md")]);
        assert_eq!(status.status_map.get("api/ref.md"), Some(PathStatus::Deleted));
        assert_eq!(status.status_map.get("api/reference.md"), Some(PathStatus::Added));
    }

    #[test]
    fn empty_inputs_resolve_clean() {
        let status = TreeStatusResolver::default().resolve(&[], &[]);
        assert!(status.is_clean());
        assert!(status.changed_folders.is_empty());
        assert_eq!(status.summary(), StatusSummary::default());
    }

    #[test]
    fn decoration_for_file_and_folder() {
        let status = TreeStatusResolver::default().resolve(&tree(), &[ChangeRecord::deleted("docs/guide/setup.md")]);

        let file = status.decoration("guide/setup.md");
        assert_eq!(file.status, Some(PathStatus::Deleted));
        assert!(!file.changed_path);
        assert_eq!(file.classes(), vec!["diff-deleted"]);

        let folder = status.decoration("guide");
        assert_eq!(folder.status, None);
        assert!(folder.changed_path);
        assert_eq!(folder.classes(), vec!["changed-path"]);

        assert_eq!(status.decoration("api"), NodeDecoration::default());
    }

    #[test]
    fn folder_entry_gets_badge_without_marking_parents() {
        let tree = vec![TreeNode::folder(
            "vendor",
            "vendor",
            vec![TreeNode::folder("theme", "vendor/theme", Vec::new())],
        )];
        let status = TreeStatusResolver::default().resolve(&tree, &[ChangeRecord::modified("docs/vendor/theme")]);

        let theme = status.decoration("vendor/theme");
        assert_eq!(theme.status, Some(PathStatus::Modified));
        assert!(!theme.changed_path);
        assert!(!status.decoration("vendor").changed_path);
        assert!(status.changed_folders.is_empty());
    }

    #[test]
    fn summary_counts() {
        let status = TreeStatusResolver::default().resolve(
            &tree(),
            &[
                ChangeRecord::renamed("docs/guide/intro.md", "docs/guide/start.md"),
                ChangeRecord::modified("docs/api/ref.md"),
            ],
        );
        assert_eq!(
            status.summary(),
            StatusSummary {
                added: 1,
                deleted: 1,
                modified: 1,
                changed_folders: 2,
            }
        );
    }

    #[test]
    fn identical_range_skips_fetch() {
        let resolver = TreeStatusResolver::default();
        let status: Result<TreeStatus, String> =
            resolver.resolve_range("abc", "abc", &tree(), || Err("fetch called".to_string()));
        assert!(status.unwrap().is_clean());
    }

    #[test]
    fn distinct_range_fetches_changes() {
        let resolver = TreeStatusResolver::default();
        let status = resolver
            .resolve_range("abc", "def", &tree(), || {
                Ok::<_, String>(vec![ChangeRecord::modified("docs/api/ref.md")])
            })
            .unwrap();
        assert!(status.changed_folders.contains("api"));
    }

    #[test]
    fn range_propagates_fetch_error() {
        let resolver = TreeStatusResolver::default();
        let err = resolver
            .resolve_range("abc", "def", &tree(), || Err::<Vec<ChangeRecord>, _>("offline"))
            .unwrap_err();
        assert_eq!(err, "offline");
    }

    #[test]
    fn config_from_partial_json() {
        let c: ResolverConfig = serde_json::from_str(r#"{"hide_deleted": true}"#).unwrap();
        assert!(c.hide_deleted);
        assert_eq!(c.tree_root, "docs/");
    }
}
