//! Path utilities for ng CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Directory holding blueprints inside a project or the user data dir
pub const BLUEPRINTS_DIR: &str = "blueprints";

/// Current working directory
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}

/// Resolve `path` against `base` unless it is already absolute
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Per-user blueprint directory (e.g. ~/.local/share/ng-cli/blueprints)
pub fn user_blueprints_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ng-cli").map(|dirs| dirs.data_dir().join(BLUEPRINTS_DIR))
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Whether `path` is missing or an empty directory
pub fn is_empty_or_missing(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?;
    Ok(entries.next().is_none())
}
