use std::fs;
use std::path::Path;

use anyhow::Context;
use dt_diff::ResolverConfig;
use dt_tree::{ViewConfig, VisibilityRules};
use serde::{Deserialize, Serialize};

/// Top-level configuration file. Every section and field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocTreeConfig {
    pub resolver: ResolverConfig,
    pub visibility: VisibilityRules,
    pub view: ViewConfig,
    pub scan: ScanConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extensions kept when scanning, with leading dot.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec![".md".to_string()],
        }
    }
}

impl DocTreeConfig {
    /// Load from `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
