//! Decoding of backend JSON payloads.
//!
//! The backend answers with a bare array on success and an `{"error": ...}`
//! object when git fails (for example in a repository without commits).
//! Failures degrade to empty inputs so the tree still renders undecorated.

use dt_types::{ChangeRecord, TreeNode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::DiffResult;

/// A tree restricted to locally changed files, with the changes it shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalDiff {
    pub tree: Vec<TreeNode>,
    pub diffs: Vec<ChangeRecord>,
}

/// Decode a "list tree" response.
pub fn parse_tree(json: &str) -> DiffResult<Vec<TreeNode>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(decode_array(value, "tree"))
}

/// Decode a working-tree or tree-to-tree diff response.
pub fn parse_changes(json: &str) -> DiffResult<Vec<ChangeRecord>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(decode_array(value, "changes"))
}

/// Decode a `{ "tree": [...], "diffs": [...] }` bundle.
pub fn parse_local_diff(json: &str) -> DiffResult<LocalDiff> {
    let mut value: Value = serde_json::from_str(json)?;
    let Some(obj) = value.as_object_mut() else {
        warn!("local diff payload is not an object");
        return Ok(LocalDiff::default());
    };
    let tree = obj.remove("tree").map(|v| decode_array(v, "tree")).unwrap_or_default();
    let diffs = obj.remove("diffs").map(|v| decode_array(v, "diffs")).unwrap_or_default();
    Ok(LocalDiff { tree, diffs })
}

fn decode_array<T: DeserializeOwned>(value: Value, what: &str) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(obj) if obj.contains_key("error") => {
            warn!(what, error = %obj["error"], "backend reported an error");
            return Vec::new();
        }
        other => {
            warn!(what, kind = value_kind(&other), "expected an array");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(what, index = idx, error = %e, "skipping undecodable entry");
                None
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_types::ChangeStatus;

    #[test]
    fn parse_tree_array() {
        let tree = parse_tree(
            r#"[{"type": "folder", "name": "g", "path": "g", "children": [
                   {"type": "file", "name": "a.md", "path": "g/a.md"}]}]"#,
        )
        .unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children().len(), 1);
    }

    #[test]
    fn parse_changes_array() {
        let changes = parse_changes(
            r#"[
                {"old_path": "docs/a.md", "new_path": "docs/a.md", "status": "M"},
                {"old_path": "docs/b.md", "new_path": "docs/c.md", "status": "R"},
                {"old_path": null, "new_path": "docs/d.md", "status": "A"}
            ]"#,
        )
        .unwrap();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[1].status, ChangeStatus::Renamed);
    }

    #[test]
    fn error_object_yields_empty_changes() {
        let changes = parse_changes(r#"{"error": "bad revision 'HEAD'"}"#).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn nested_null_children_keep_the_subtree() {
        let tree = parse_tree(
            r#"[
                {"type": "folder", "name": "guide", "path": "guide", "children": [
                    {"type": "file", "name": "a.md", "path": "guide/a.md"},
                    {"type": "folder", "name": "empty", "path": "guide/empty", "children": null}
                ]},
                {"type": "file", "name": "index.md", "path": "index.md"}
            ]"#,
        )
        .unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].path(), "guide");
        assert_eq!(tree[0].children().len(), 2);
        assert!(tree[0].children()[1].children().is_empty());
    }

    #[test]
    fn nested_unknown_node_type_keeps_the_subtree() {
        let tree = parse_tree(
            r#"[
                {"type": "folder", "name": "guide", "path": "guide", "children": [
                    {"type": "symlink", "name": "s", "path": "guide/s"},
                    {"type": "file", "name": "a.md", "path": "guide/a.md"}
                ]}
            ]"#,
        )
        .unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children(), &[TreeNode::file("a.md", "guide/a.md")]);
    }

    #[test]
    fn non_array_yields_empty_tree() {
        assert!(parse_tree("null").unwrap().is_empty());
        assert!(parse_tree(r#""oops""#).unwrap().is_empty());
    }

    #[test]
    fn bad_entries_are_skipped() {
        let changes = parse_changes(
            r#"[
                {"new_path": "docs/a.md", "status": "X"},
                {"new_path": "docs/b.md", "status": "M"},
                42
            ]"#,
        )
        .unwrap();
        assert_eq!(changes, vec![ChangeRecord {
            old_path: None,
            new_path: Some("docs/b.md".into()),
            status: ChangeStatus::Modified,
        }]);
    }

    #[test]
    fn record_without_paths_still_decodes() {
        let changes = parse_changes(r#"[{"status": "M"}]"#).unwrap();
        assert_eq!(changes.len(), 1);
        assert!(changes[0].old_path.is_none() && changes[0].new_path.is_none());
    }

    #[test]
    fn syntax_error_is_reported() {
        assert!(parse_changes("[{").is_err());
    }

    #[test]
    fn local_diff_bundle() {
        let bundle = parse_local_diff(
            r#"{"tree": [{"type": "file", "name": "a.md", "path": "a.md"}],
                "diffs": [{"old_path": null, "new_path": "docs/a.md", "status": "A"}]}"#,
        )
        .unwrap();
        assert_eq!(bundle.tree.len(), 1);
        assert_eq!(bundle.diffs, vec![ChangeRecord::added("docs/a.md")]);
    }

    #[test]
    fn local_diff_missing_fields_default_empty() {
        let bundle = parse_local_diff(r#"{"tree": {"error": "x"}}"#).unwrap();
        assert_eq!(bundle, LocalDiff::default());
        assert_eq!(parse_local_diff("[]").unwrap(), LocalDiff::default());
    }
}
