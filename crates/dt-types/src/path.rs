//! Tree-relative path helpers.
//!
//! Tree paths are `/`-separated and relative to the documentation root. The
//! backend reports git paths rooted at the repository, so change paths carry
//! the documentation root (e.g. `docs/`) as a prefix that must be removed
//! before they can be matched against tree nodes.

/// Convert Windows-style separators to `/`.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Remove `root` from the front of `path` when present.
///
/// Paths that do not start with `root` are returned unchanged. An empty
/// `root` is a no-op.
pub fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    path.strip_prefix(root).unwrap_or(path)
}

/// All proper ancestor folder paths of `path`, nearest first.
///
/// `ancestors("a/b/c.md")` yields `["a/b", "a"]`.
pub fn ancestors(path: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = path.trim_end_matches('/');
    while let Some(idx) = rest.rfind('/') {
        rest = &rest[..idx];
        if !rest.is_empty() {
            out.push(rest);
        }
    }
    out
}
