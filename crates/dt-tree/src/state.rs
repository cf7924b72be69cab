//! Sidebar interaction state.
//!
//! The open-folder set, the active folder, the current document and the
//! selected node live in one explicit value. Rendering code receives it as an
//! argument; persistence goes through a [`ViewStateStore`](crate::store::ViewStateStore).

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use dt_types::{NodeKind, TreeNode};
use serde::{Deserialize, Serialize};

use crate::query::folder_paths;

/// Configuration for sidebar state handling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Seconds after which a persisted selection is considered stale.
    pub selection_ttl_secs: i64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            selection_ttl_secs: 300,
        }
    }
}

impl ViewConfig {
    /// The TTL as a duration; values beyond chrono's range saturate.
    pub fn selection_ttl(&self) -> Duration {
        Duration::try_seconds(self.selection_ttl_secs).unwrap_or(if self.selection_ttl_secs < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        })
    }
}

/// The selected tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    pub selected_at: DateTime<Utc>,
}

/// Sidebar state: which folders are open and what is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeViewState {
    open_folders: BTreeSet<String>,
    active_folder: Option<String>,
    current_path: Option<String>,
    selection: Option<Selection>,
}

impl TreeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------
    // Open folders
    // ---------------------------------------------------------------

    pub fn open(&mut self, path: impl Into<String>) {
        self.open_folders.insert(path.into());
    }

    pub fn close(&mut self, path: &str) {
        self.open_folders.remove(path);
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.open_folders.contains(path)
    }

    /// Flip a folder between open and closed; returns the new open state.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.open_folders.remove(path) {
            false
        } else {
            self.open_folders.insert(path.to_string());
            true
        }
    }

    /// Open `node` and every folder beneath it.
    pub fn expand_all(&mut self, node: &TreeNode) {
        for path in folder_paths(node) {
            self.open_folders.insert(path.to_string());
        }
    }

    /// Close `node` and every folder beneath it.
    pub fn collapse_all(&mut self, node: &TreeNode) {
        for path in folder_paths(node) {
            self.open_folders.remove(path);
        }
    }

    /// Open folders in path order.
    pub fn open_folders(&self) -> impl Iterator<Item = &str> {
        self.open_folders.iter().map(String::as_str)
    }

    // ---------------------------------------------------------------
    // Active folder and current document
    // ---------------------------------------------------------------

    /// Set the folder new files are created in. An empty path clears it.
    pub fn set_active_folder(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.active_folder = (!path.is_empty()).then_some(path);
    }

    pub fn active_folder(&self) -> Option<&str> {
        self.active_folder.as_deref()
    }

    pub fn set_current_path(&mut self, path: Option<String>) {
        self.current_path = path;
    }

    /// The document open in the editor.
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    // ---------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------

    pub fn select(&mut self, path: impl Into<String>, name: impl Into<String>, kind: NodeKind, now: DateTime<Utc>) {
        self.selection = Some(Selection {
            path: path.into(),
            name: name.into(),
            kind,
            selected_at: now,
        });
    }

    /// Select `node`; selecting a folder also makes it the active folder.
    pub fn select_node(&mut self, node: &TreeNode, now: DateTime<Utc>) {
        if node.is_folder() {
            self.set_active_folder(node.path());
        }
        self.select(node.path(), node.name(), node.kind(), now);
    }

    /// The selection, unless it is older than `ttl` at `now`.
    pub fn selected(&self, now: DateTime<Utc>, ttl: Duration) -> Option<&Selection> {
        self.selection
            .as_ref()
            .filter(|s| now.signed_duration_since(s.selected_at) < ttl)
    }

    /// Whether `node` is the current selection.
    pub fn is_selected(&self, node: &TreeNode, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.selected(now, ttl)
            .is_some_and(|s| s.path == node.path() && s.kind == node.kind())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Reset selection and active folder, as when clicking empty sidebar space.
    pub fn clear_interaction(&mut self) {
        self.selection = None;
        self.active_folder = None;
    }
}
