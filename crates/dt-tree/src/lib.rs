//! Documentation tree utilities for doctree.
//!
//! Builds [`TreeNode`](dt_types::TreeNode) forests from a docs directory,
//! narrows them to a set of paths, applies sidebar visibility rules, and
//! keeps the sidebar's interaction state as an explicit value.
//!
//! # Key Types
//!
//! - [`scan_dir`] -- Directory walk into a tree forest
//! - [`VisibilityRules`] -- Ignored and hidden folder rules
//! - [`TreeViewState`] -- Open folders, active folder, and selection
//! - [`ViewStateStore`] -- Persistence seam for the view state

pub mod error;
pub mod filter;
pub mod query;
pub mod scan;
pub mod state;
pub mod store;

pub use error::{TreeError, TreeResult};
pub use filter::{filter_to_paths, visible_nodes, VisibilityRules};
pub use query::{file_exists, file_paths, find_node, folder_paths};
pub use scan::scan_dir;
pub use state::{Selection, TreeViewState, ViewConfig};
pub use store::{InMemoryViewStateStore, JsonFileViewStateStore, ViewStateStore};
