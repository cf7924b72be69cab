//! Lookups over a tree forest.

use dt_types::TreeNode;

/// Whether a file (not a folder) with `path` exists anywhere in `tree`.
pub fn file_exists(tree: &[TreeNode], path: &str) -> bool {
    matches!(find_node(tree, path), Some(TreeNode::File { .. }))
}

/// Find the node with `path`, descending only into folders whose path prefixes it.
pub fn find_node<'a>(tree: &'a [TreeNode], path: &str) -> Option<&'a TreeNode> {
    for node in tree {
        if node.path() == path {
            return Some(node);
        }
        if node.is_folder() && is_under(path, node.path()) {
            if let Some(found) = find_node(node.children(), path) {
                return Some(found);
            }
        }
    }
    None
}

/// Paths of `node` (if a folder) and every folder beneath it, pre-order.
pub fn folder_paths(node: &TreeNode) -> Vec<&str> {
    let mut out = Vec::new();
    collect_folders(node, &mut out);
    out
}

/// Paths of every file in `tree`, pre-order.
pub fn file_paths(tree: &[TreeNode]) -> Vec<&str> {
    let mut out = Vec::new();
    for node in tree {
        collect_files(node, &mut out);
    }
    out
}

fn collect_folders<'a>(node: &'a TreeNode, out: &mut Vec<&'a str>) {
    if let TreeNode::Folder { path, children, .. } = node {
        out.push(path.as_str());
        for child in children {
            collect_folders(child, out);
        }
    }
}

fn collect_files<'a>(node: &'a TreeNode, out: &mut Vec<&'a str>) {
    match node {
        TreeNode::File { path, .. } => out.push(path.as_str()),
        TreeNode::Folder { children, .. } => {
            for child in children {
                collect_files(child, out);
            }
        }
    }
}

fn is_under(path: &str, folder: &str) -> bool {
    path.strip_prefix(folder).is_some_and(|rest| rest.starts_with('/'))
}
