//! # Configuration
//!
//! Arbor configuration is loaded with [`confique`] from two layers, in
//! priority order:
//!
//! 1. **Environment variables**: `ARBOR_DEFAULT_TREE`, `ARBOR_INDENT`, `ARBOR_SHOW_COLLAPSED`
//! 2. **Config file**: `arbor.toml` in the data directory
//!
//! Anything unset falls back to the compiled defaults below.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_tree` | none | Tree used when `--tree` is not given |
//! | `indent` | `2` | Spaces per depth level in listings |
//! | `show_collapsed` | `false` | List children of collapsed folders too |
//!
//! ## Data Directory
//!
//! [`resolve_data_dir`] picks where trees and `arbor.toml` live: an explicit
//! directory, else `$ARBOR_DIR`, else the OS data directory for "arbor".

use crate::error::{ArborError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "arbor.toml";
pub const DATA_DIR_ENV: &str = "ARBOR_DIR";

/// Configuration for arbor, stored in `arbor.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArborConfig {
    /// Tree to operate on when none is given on the command line.
    #[config(env = "ARBOR_DEFAULT_TREE")]
    pub default_tree: Option<String>,

    /// Spaces per depth level when listing.
    #[config(env = "ARBOR_INDENT", default = 2)]
    pub indent: usize,

    /// List the children of collapsed folders.
    #[config(env = "ARBOR_SHOW_COLLAPSED", default = false)]
    pub show_collapsed: bool,
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            default_tree: None,
            indent: 2,
            show_collapsed: false,
        }
    }
}

impl ArborConfig {
    /// Loads configuration from the environment and `arbor.toml` in
    /// `data_dir`. A missing file is not an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = ArborConfig::builder()
            .env()
            .file(data_dir.join(CONFIG_FILENAME))
            .load()?;
        Ok(config)
    }
}

/// Picks the data directory: `explicit`, else `$ARBOR_DIR`, else the
/// platform data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "arbor")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ArborError::Config("Could not determine a data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = ArborConfig::default();
        assert_eq!(config.indent, 2);
        assert!(!config.show_collapsed);
        assert!(config.default_tree.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ArborConfig::load(dir.path()).unwrap();
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "default_tree = \"tree-abc\"\nshow_collapsed = true\n",
        )
        .unwrap();
        let config = ArborConfig::load(dir.path()).unwrap();
        assert_eq!(config.default_tree.as_deref(), Some("tree-abc"));
        assert!(config.show_collapsed);
    }

    #[test]
    fn test_load_rejects_bad_types() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "indent = \"wide\"\n").unwrap();
        assert!(matches!(
            ArborConfig::load(dir.path()),
            Err(ArborError::Config(_))
        ));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/arbor-here"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/arbor-here"));
    }
}
