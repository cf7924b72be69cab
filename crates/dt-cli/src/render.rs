use colored::Colorize;
use dt_diff::{StatusSummary, TreeStatus};
use dt_types::{PathStatus, TreeNode};

/// Render `nodes` as indented lines with status badges.
pub fn render_tree(nodes: &[TreeNode], status: &TreeStatus, color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for node in nodes {
        render_node(node, status, color, 0, &mut lines);
    }
    lines
}

fn render_node(node: &TreeNode, status: &TreeStatus, color: bool, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let decoration = status.decoration(node.path());

    let mut label = match node {
        TreeNode::Folder { .. } => format!("{}/", node.display_name()),
        TreeNode::File { .. } => node.display_name().to_string(),
    };
    if color && decoration.changed_path {
        label = label.bold().to_string();
    }
    if let Some(s) = decoration.status {
        label.push(' ');
        label.push_str(&badge(s, color));
    }
    if decoration.changed_path {
        label.push_str(if color { " •" } else { " (changed)" });
    }
    lines.push(format!("{indent}{label}"));

    for child in node.children() {
        render_node(child, status, color, depth + 1, lines);
    }
}

fn badge(status: PathStatus, color: bool) -> String {
    let text = format!("[{}]", status.code());
    if !color {
        return text;
    }
    match status {
        PathStatus::Added => text.green().to_string(),
        PathStatus::Deleted => text.red().to_string(),
        PathStatus::Modified => text.yellow().to_string(),
    }
}

/// One-line summary, e.g. `1 added, 0 deleted, 2 modified in 2 folders`.
pub fn render_summary(summary: &StatusSummary) -> String {
    format!(
        "{} added, {} deleted, {} modified in {} folders",
        summary.added, summary.deleted, summary.modified, summary.changed_folders
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_diff::{ResolverConfig, TreeStatusResolver};
    use dt_types::ChangeRecord;

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
            TreeNode::file("index.md", "index.md"),
        ]
    }

    #[test]
    fn plain_rendering() {
        let resolver = TreeStatusResolver::new(ResolverConfig {
            tree_root: String::new(),
            ..Default::default()
        });
        let status = resolver.resolve(
            &tree(),
            &[ChangeRecord::modified("guide/intro.md"), ChangeRecord::added("index.md")],
        );
        let lines = render_tree(&tree(), &status, false);
        assert_eq!(
            lines,
            vec!["guide/ (changed)", "  intro [M]", "  setup", "index [A]"]
        );
    }

    #[test]
    fn clean_tree_has_no_badges() {
        let lines = render_tree(&tree(), &TreeStatus::default(), false);
        assert_eq!(lines, vec!["guide/", "  intro", "  setup", "index"]);
    }

    #[test]
    fn summary_line() {
        let summary = StatusSummary {
            added: 1,
            deleted: 0,
            modified: 2,
            changed_folders: 2,
        };
        assert_eq!(render_summary(&summary), "1 added, 0 deleted, 2 modified in 2 folders");
    }
}
