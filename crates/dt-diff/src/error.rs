//! Error types for the diff crate.

/// Errors that can occur while decoding diff inputs.
///
/// Resolution itself never fails; only malformed JSON documents are errors.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The input document is not valid JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
