//! Build a tree forest from a documentation directory.

use std::path::Path;

use dt_types::{normalize_path, TreeNode};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{TreeError, TreeResult};

/// A folder still receiving children during the walk.
struct OpenFolder {
    depth: usize,
    name: String,
    path: String,
    children: Vec<TreeNode>,
}

/// Walk `root` and return its contents as a forest of [`TreeNode`]s.
///
/// Paths are relative to `root` and `/`-separated. Files are kept only when
/// their extension (with leading dot, compared case-insensitively) is in
/// `extensions`; an empty list keeps every file. Folders are always kept.
/// Entries are ordered by file name.
pub fn scan_dir(root: &Path, extensions: &[String]) -> TreeResult<Vec<TreeNode>> {
    if !root.is_dir() {
        return Err(TreeError::RootNotFound(root.to_path_buf()));
    }
    let extensions: Vec<String> = extensions.iter().map(|e| e.to_lowercase()).collect();

    let mut roots = Vec::new();
    let mut stack: Vec<OpenFolder> = Vec::new();
    let mut files = 0usize;

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let depth = entry.depth();

        while stack.last().is_some_and(|f| f.depth >= depth) {
            close_folder(&mut stack, &mut roots);
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let path = normalize_path(&rel.to_string_lossy());

        if entry.file_type().is_dir() {
            stack.push(OpenFolder {
                depth,
                name,
                path,
                children: Vec::new(),
            });
        } else if matches_extension(entry.path(), &extensions) {
            files += 1;
            let node = TreeNode::file(name, path);
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => roots.push(node),
            }
        }
    }
    while !stack.is_empty() {
        close_folder(&mut stack, &mut roots);
    }

    debug!(root = %root.display(), files, "scanned documentation tree");
    Ok(roots)
}

fn close_folder(stack: &mut Vec<OpenFolder>, roots: &mut Vec<TreeNode>) {
    let Some(folder) = stack.pop() else { return };
    let node = TreeNode::folder(folder.name, folder.path, folder.children);
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    match path.extension() {
        Some(ext) => {
            let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
            extensions.iter().any(|e| *e == ext)
        }
        None => false,
    }
}
