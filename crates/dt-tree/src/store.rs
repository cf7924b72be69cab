//! Persistence for [`TreeViewState`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::TreeResult;
use crate::state::TreeViewState;

/// Where the sidebar state survives between sessions.
///
/// Implementations must return the default state when nothing has been
/// saved yet, and must propagate I/O errors.
pub trait ViewStateStore: Send + Sync {
    /// Load the last saved state.
    fn load(&self) -> TreeResult<TreeViewState>;

    /// Replace the saved state.
    fn save(&self, state: &TreeViewState) -> TreeResult<()>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryViewStateStore {
    state: RwLock<TreeViewState>,
}

impl InMemoryViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewStateStore for InMemoryViewStateStore {
    fn load(&self) -> TreeResult<TreeViewState> {
        Ok(self.state.read().expect("lock poisoned").clone())
    }

    fn save(&self, state: &TreeViewState) -> TreeResult<()> {
        *self.state.write().expect("lock poisoned") = state.clone();
        Ok(())
    }
}

/// JSON document on disk.
///
/// Saves write a sibling temporary file and rename it over the target, so a
/// crash never leaves a truncated document behind.
#[derive(Clone, Debug)]
pub struct JsonFileViewStateStore {
    path: PathBuf,
}

impl JsonFileViewStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ViewStateStore for JsonFileViewStateStore {
    fn load(&self) -> TreeResult<TreeViewState> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved view state");
            return Ok(TreeViewState::default());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, state: &TreeViewState) -> TreeResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(state)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "saved view state");
        Ok(())
    }
}
