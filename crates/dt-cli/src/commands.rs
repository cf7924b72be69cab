use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use colored::Colorize;
use dt_diff::{
    parse_changes, parse_local_diff, parse_tree, ChangedFolderSet, StatusMap, StatusSummary,
    TreeStatus, TreeStatusResolver,
};
use dt_tree::{
    filter_to_paths, find_node, scan_dir, visible_nodes, JsonFileViewStateStore, TreeError,
    TreeViewState, ViewStateStore,
};
use dt_types::{ChangeRecord, TreeNode};
use serde::Serialize;
use tracing::info;

use crate::cli::*;
use crate::config::DocTreeConfig;
use crate::render::{render_summary, render_tree};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = DocTreeConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Status(args) => cmd_status(args, &config, &cli.format),
        Command::LocalDiff(args) => cmd_local_diff(args, &config, &cli.format),
        Command::Scan(args) => cmd_scan(args, &config),
        Command::View(args) => cmd_view(args, &config, &cli.format),
    }
}

/// JSON form of a resolved tree.
#[derive(Serialize)]
struct StatusReport<'a> {
    status_map: &'a StatusMap,
    changed_folders: &'a ChangedFolderSet,
    summary: StatusSummary,
}

impl<'a> StatusReport<'a> {
    fn new(status: &'a TreeStatus) -> Self {
        Self {
            status_map: &status.status_map,
            changed_folders: &status.changed_folders,
            summary: status.summary(),
        }
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_tree(path: &Path) -> anyhow::Result<Vec<TreeNode>> {
    parse_tree(&read_file(path)?).with_context(|| format!("decoding tree {}", path.display()))
}

fn load_changes(path: Option<&Path>) -> anyhow::Result<Vec<ChangeRecord>> {
    match path {
        Some(path) => parse_changes(&read_file(path)?)
            .with_context(|| format!("decoding changes {}", path.display())),
        None => Ok(Vec::new()),
    }
}

fn resolver_for(config: &DocTreeConfig, root: Option<String>, hide_deleted: bool) -> TreeStatusResolver {
    let mut resolver_config = config.resolver.clone();
    if let Some(root) = root {
        resolver_config.tree_root = root;
    }
    resolver_config.hide_deleted |= hide_deleted;
    TreeStatusResolver::new(resolver_config)
}

/// Load, resolve, and shape the tree shown by `status`.
fn status_view(args: StatusArgs, config: &DocTreeConfig) -> anyhow::Result<(Vec<TreeNode>, TreeStatus)> {
    let tree = load_tree(&args.tree)?;
    let resolver = resolver_for(config, args.root, args.hide_deleted);

    let status = match (&args.left, &args.right) {
        (Some(left), Some(right)) => {
            resolver.resolve_range(left, right, &tree, || load_changes(args.changes.as_deref()))?
        }
        _ => resolver.resolve(&tree, &load_changes(args.changes.as_deref())?),
    };

    let tree = if args.changed_only {
        let paths: BTreeSet<String> = status.status_map.iter().map(|(p, _)| p.to_string()).collect();
        filter_to_paths(&tree, &paths)
    } else {
        tree
    };
    Ok((visible_nodes(&tree, &config.visibility, true), status))
}

fn print_status(tree: &[TreeNode], status: &TreeStatus, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&StatusReport::new(status))?);
        }
        OutputFormat::Text => {
            if tree.is_empty() {
                println!("No files.");
            }
            for line in render_tree(tree, status, true) {
                println!("{line}");
            }
            if status.is_clean() {
                println!("\n{}", "No changes.".green());
            } else {
                println!("\n{}", render_summary(&status.summary()).bold());
            }
        }
    }
    Ok(())
}

fn cmd_status(args: StatusArgs, config: &DocTreeConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let (tree, status) = status_view(args, config)?;
    print_status(&tree, &status, format)
}

fn local_diff_view(args: LocalDiffArgs, config: &DocTreeConfig) -> anyhow::Result<(Vec<TreeNode>, TreeStatus)> {
    let bundle = parse_local_diff(&read_file(&args.input)?)
        .with_context(|| format!("decoding {}", args.input.display()))?;
    let status = resolver_for(config, args.root, false).resolve(&bundle.tree, &bundle.diffs);
    Ok((visible_nodes(&bundle.tree, &config.visibility, true), status))
}

fn cmd_local_diff(args: LocalDiffArgs, config: &DocTreeConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let (tree, status) = local_diff_view(args, config)?;
    print_status(&tree, &status, format)
}

fn cmd_scan(args: ScanArgs, config: &DocTreeConfig) -> anyhow::Result<()> {
    let extensions = if args.extensions.is_empty() {
        &config.scan.extensions
    } else {
        &args.extensions
    };
    let tree = scan_dir(&args.dir, extensions)?;
    info!(dir = %args.dir.display(), nodes = tree.iter().map(TreeNode::node_count).sum::<usize>(), "scan complete");
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

/// Apply `action` to `state`. Returns whether the state changed.
fn apply_view_action(state: &mut TreeViewState, action: ViewAction) -> anyhow::Result<bool> {
    match action {
        ViewAction::Show => return Ok(false),
        ViewAction::Open { path } => state.open(path),
        ViewAction::Close { path } => state.close(&path),
        ViewAction::Toggle { path } => {
            state.toggle(&path);
        }
        ViewAction::Current { path } => state.set_current_path(Some(path)),
        ViewAction::Clear => state.clear_interaction(),
        ViewAction::Select { path, tree } => {
            let tree = load_tree(&tree)?;
            let node = find_node(&tree, &path).ok_or_else(|| TreeError::PathNotFound(path.clone()))?;
            state.select_node(node, Utc::now());
        }
        ViewAction::ExpandAll { path, tree } => {
            let tree = load_tree(&tree)?;
            let node = find_node(&tree, &path).ok_or_else(|| TreeError::PathNotFound(path.clone()))?;
            state.expand_all(node);
        }
        ViewAction::CollapseAll { path, tree } => {
            let tree = load_tree(&tree)?;
            let node = find_node(&tree, &path).ok_or_else(|| TreeError::PathNotFound(path.clone()))?;
            state.collapse_all(node);
        }
    }
    Ok(true)
}

fn cmd_view(args: ViewArgs, config: &DocTreeConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let store = JsonFileViewStateStore::new(&args.state);
    let mut state = store.load()?;

    if apply_view_action(&mut state, args.action.unwrap_or(ViewAction::Show))? {
        store.save(&state)?;
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
        OutputFormat::Text => {
            let open: Vec<&str> = state.open_folders().collect();
            println!("Open folders: {}", if open.is_empty() { "(none)".dimmed().to_string() } else { open.join(", ") });
            println!("Active folder: {}", state.active_folder().unwrap_or("(none)"));
            println!("Current file: {}", state.current_path().unwrap_or("(none)"));
            match state.selected(Utc::now(), config.view.selection_ttl()) {
                Some(sel) => println!("Selected: {} {}", sel.kind, sel.path.yellow()),
                None => println!("Selected: (none)"),
            }
        }
    }
    Ok(())
}
