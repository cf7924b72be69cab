use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "doctree",
    about = "Git status decoration for documentation file trees",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decorate a tree with the status of a change list
    Status(StatusArgs),
    /// Decorate a combined {tree, diffs} document
    LocalDiff(LocalDiffArgs),
    /// Print a documentation directory as a tree document
    Scan(ScanArgs),
    /// Inspect or update persisted sidebar state
    View(ViewArgs),
}

#[derive(Args)]
pub struct StatusArgs {
    /// Tree document (JSON array of nodes)
    #[arg(long)]
    pub tree: PathBuf,
    /// Change list document (JSON array of change records)
    #[arg(long)]
    pub changes: Option<PathBuf>,
    /// Prefix stripped from change paths
    #[arg(long)]
    pub root: Option<String>,
    #[arg(long)]
    pub hide_deleted: bool,
    /// Only show changed files and the folders containing them
    #[arg(long)]
    pub changed_only: bool,
    /// Left commit of a comparison
    #[arg(long, requires = "right")]
    pub left: Option<String>,
    /// Right commit of a comparison
    #[arg(long, requires = "left")]
    pub right: Option<String>,
}

#[derive(Args)]
pub struct LocalDiffArgs {
    #[arg(long)]
    pub input: PathBuf,
    #[arg(long)]
    pub root: Option<String>,
}

#[derive(Args)]
pub struct ScanArgs {
    pub dir: PathBuf,
    /// File extensions to keep (with leading dot); repeatable
    #[arg(long = "ext")]
    pub extensions: Vec<String>,
}

#[derive(Args)]
pub struct ViewArgs {
    /// View state document
    #[arg(long)]
    pub state: PathBuf,
    #[command(subcommand)]
    pub action: Option<ViewAction>,
}

#[derive(Subcommand)]
pub enum ViewAction {
    Show,
    Open { path: String },
    Close { path: String },
    Toggle { path: String },
    Select {
        path: String,
        #[arg(long)]
        tree: PathBuf,
    },
    /// Set the document open in the editor
    Current { path: String },
    Clear,
    ExpandAll {
        path: String,
        #[arg(long)]
        tree: PathBuf,
    },
    CollapseAll {
        path: String,
        #[arg(long)]
        tree: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status() {
        let cli = Cli::try_parse_from(["doctree", "status", "--tree", "t.json", "--changes", "c.json"]).unwrap();
        if let Command::Status(args) = cli.command {
            assert_eq!(args.tree, PathBuf::from("t.json"));
            assert_eq!(args.changes, Some(PathBuf::from("c.json")));
            assert!(!args.hide_deleted);
            assert!(args.root.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_status_flags() {
        let cli = Cli::try_parse_from([
            "doctree", "status", "--tree", "t.json", "--root", "", "--hide-deleted", "--changed-only",
        ]).unwrap();
        if let Command::Status(args) = cli.command {
            assert_eq!(args.root, Some(String::new()));
            assert!(args.hide_deleted);
            assert!(args.changed_only);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_status_range_requires_both_sides() {
        assert!(Cli::try_parse_from(["doctree", "status", "--tree", "t", "--left", "a"]).is_err());
        let cli = Cli::try_parse_from(["doctree", "status", "--tree", "t", "--left", "a", "--right", "b"]).unwrap();
        if let Command::Status(args) = cli.command {
            assert_eq!(args.left.as_deref(), Some("a"));
            assert_eq!(args.right.as_deref(), Some("b"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_local_diff() {
        let cli = Cli::try_parse_from(["doctree", "local-diff", "--input", "bundle.json"]).unwrap();
        assert!(matches!(cli.command, Command::LocalDiff(_)));
    }

    #[test]
    fn parse_scan_extensions() {
        let cli = Cli::try_parse_from(["doctree", "scan", "docs", "--ext", ".md", "--ext", ".rst"]).unwrap();
        if let Command::Scan(args) = cli.command {
            assert_eq!(args.dir, PathBuf::from("docs"));
            assert_eq!(args.extensions, vec![".md", ".rst"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_view_expand_all() {
        let cli = Cli::try_parse_from([
            "doctree", "view", "--state", "s.json", "expand-all", "guide", "--tree", "t.json",
        ]).unwrap();
        if let Command::View(args) = cli.command {
            assert!(matches!(args.action, Some(ViewAction::ExpandAll { ref path, .. }) if path == "guide"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_view_without_action() {
        let cli = Cli::try_parse_from(["doctree", "view", "--state", "s.json"]).unwrap();
        if let Command::View(args) = cli.command {
            assert!(args.action.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_globals() {
        let cli = Cli::try_parse_from([
            "doctree", "--verbose", "--format", "json", "--config", "dt.toml", "scan", ".",
        ]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.config, Some(PathBuf::from("dt.toml")));
    }
}
