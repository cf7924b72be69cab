//! Foundation types for doctree.
//!
//! This crate provides the decoded data model shared by every other doctree
//! crate: the documentation file tree, the change records reported by the
//! backend's git diff endpoints, and the per-path statuses derived from them.
//!
//! # Key Types
//!
//! - [`TreeNode`] — A file or folder in the documentation tree
//! - [`NodeKind`] — Discriminant of a [`TreeNode`] (file or folder)
//! - [`ChangeRecord`] — A single change reported by the backend
//! - [`ChangeStatus`] — Git change letter (A/D/M/R)
//! - [`PathStatus`] — Status a single tree path can display (A/D/M)

pub mod change;
pub mod error;
pub mod node;
pub mod path;

pub use change::{ChangeRecord, ChangeStatus, PathStatus};
pub use error::TypeError;
pub use node::{NodeKind, TreeNode};
pub use path::{ancestors, normalize_path, strip_root};
