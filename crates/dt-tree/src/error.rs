//! Error types for the tree crate.

use std::path::PathBuf;

/// Errors that can occur during tree operations.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The directory to scan does not exist.
    #[error("tree root not found: {0}")]
    RootNotFound(PathBuf),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A path referenced by a view action is not in the tree.
    #[error("path not found in tree: {0}")]
    PathNotFound(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for tree results.
pub type TreeResult<T> = Result<T, TreeError>;
