//! Change records reported by the backend's diff endpoints.
//!
//! The working-tree and tree-to-tree diff endpoints both return an array of
//! `{ "old_path", "new_path", "status" }` objects. Paths are rooted at the
//! repository, not at the documentation tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Git change letter attached to a [`ChangeRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChangeStatus {
    Added,
    Deleted,
    Modified,
    Renamed,
}

impl ChangeStatus {
    /// The single-letter git code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Added => "A",
            Self::Deleted => "D",
            Self::Modified => "M",
            Self::Renamed => "R",
        }
    }

    /// The status a path carrying this change displays, or `None` for renames,
    /// which expand into a deletion and an addition.
    pub fn as_path_status(&self) -> Option<PathStatus> {
        match self {
            Self::Added => Some(PathStatus::Added),
            Self::Deleted => Some(PathStatus::Deleted),
            Self::Modified => Some(PathStatus::Modified),
            Self::Renamed => None,
        }
    }
}

impl FromStr for ChangeStatus {
    type Err = TypeError;

    /// Accepts git letters (`R100` included) and the long variant names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "Added" => Ok(Self::Added),
            "D" | "Deleted" => Ok(Self::Deleted),
            "M" | "Modified" => Ok(Self::Modified),
            "Renamed" => Ok(Self::Renamed),
            s if s.starts_with('R') && s[1..].bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self::Renamed)
            }
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for ChangeStatus {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChangeStatus> for String {
    fn from(status: ChangeStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single change between two trees (or a tree and the working directory).
///
/// A rename carries both paths; every other status carries exactly one.
/// Records missing both paths are tolerated and skipped downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    #[serde(default)]
    pub old_path: Option<String>,
    #[serde(default)]
    pub new_path: Option<String>,
    pub status: ChangeStatus,
}

impl ChangeRecord {
    pub fn added(path: impl Into<String>) -> Self {
        Self {
            old_path: None,
            new_path: Some(path.into()),
            status: ChangeStatus::Added,
        }
    }

    pub fn deleted(path: impl Into<String>) -> Self {
        Self {
            old_path: Some(path.into()),
            new_path: None,
            status: ChangeStatus::Deleted,
        }
    }

    /// A modification; git reports the same path on both sides.
    pub fn modified(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            old_path: Some(path.clone()),
            new_path: Some(path),
            status: ChangeStatus::Modified,
        }
    }

    pub fn renamed(old_path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self {
            old_path: Some(old_path.into()),
            new_path: Some(new_path.into()),
            status: ChangeStatus::Renamed,
        }
    }
}

/// The status a single tree path can display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PathStatus {
    #[serde(rename = "A")]
    Added,
    #[serde(rename = "D")]
    Deleted,
    #[serde(rename = "M")]
    Modified,
}

impl PathStatus {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Added => "A",
            Self::Deleted => "D",
            Self::Modified => "M",
        }
    }

    /// Badge class a renderer attaches to the node's label.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Added => "diff-added",
            Self::Deleted => "diff-deleted",
            Self::Modified => "diff-modified",
        }
    }
}

impl fmt::Display for PathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
