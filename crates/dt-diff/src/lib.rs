//! Git status decoration for the doctree file tree.
//!
//! Maps the flat change list reported by the backend onto the hierarchical
//! documentation tree: each changed path gets a display status, and every
//! folder containing a change (at any depth) is flagged.
//!
//! # Key Types
//!
//! - [`StatusMap`] / [`build_status_map`] -- Per-path status with rename expansion
//! - [`ChangedFolderSet`] / [`compute_changed_folders`] -- Upward change propagation
//! - [`TreeStatusResolver`] / [`ResolverConfig`] -- Both steps behind one configured entry point
//! - [`TreeStatus`] / [`NodeDecoration`] -- Resolved output as consumed by a renderer

pub mod changed_folders;
pub mod error;
pub mod input;
pub mod resolver;
pub mod status_map;

pub use changed_folders::{compute_changed_folders, ChangedFolderSet};
pub use error::{DiffError, DiffResult};
pub use input::{parse_changes, parse_local_diff, parse_tree, LocalDiff};
pub use resolver::{NodeDecoration, ResolverConfig, StatusSummary, TreeStatus, TreeStatusResolver};
pub use status_map::{build_status_map, StatusMap};
