//! The documentation file tree.
//!
//! The backend's "list tree" endpoint returns a JSON forest of nodes shaped
//! `{ "type": "file"|"folder", "name", "path", "children"? }`. [`TreeNode`]
//! decodes that shape directly into a sum type so callers match on the node
//! kind instead of inspecting a string tag.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A file or folder in the documentation tree.
///
/// Paths are unique across a tree and `/`-separated. A folder's path is a
/// prefix of every descendant's path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    /// A leaf document.
    File { name: String, path: String },
    /// A directory with ordered children.
    Folder {
        name: String,
        path: String,
        #[serde(default, deserialize_with = "lenient_children")]
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Create a file node.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a folder node.
    pub fn folder(name: impl Into<String>, path: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self::Folder {
            name: name.into(),
            path: path.into(),
            children,
        }
    }

    /// The node's own name (last path component).
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    /// The node's tree-relative path.
    pub fn path(&self) -> &str {
        match self {
            Self::File { path, .. } | Self::Folder { path, .. } => path,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::File { .. } => NodeKind::File,
            Self::Folder { .. } => NodeKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::File { .. } => &[],
            Self::Folder { children, .. } => children,
        }
    }

    /// Name shown in the sidebar: markdown documents drop their `.md` suffix.
    pub fn display_name(&self) -> &str {
        let name = self.name();
        name.strip_suffix(".md").unwrap_or(name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(TreeNode::node_count).sum::<usize>()
    }
}

/// Discriminant of a [`TreeNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// Decode a folder's children, treating `null` as empty and dropping
/// entries that are not valid nodes so one bad entry keeps its siblings.
fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Child {
        Node(TreeNode),
        Invalid(IgnoredAny),
    }

    let children: Option<Vec<Child>> = Option::deserialize(deserializer)?;
    Ok(children
        .unwrap_or_default()
        .into_iter()
        .filter_map(|child| match child {
            Child::Node(node) => Some(node),
            Child::Invalid(_) => None,
        })
        .collect())
}
