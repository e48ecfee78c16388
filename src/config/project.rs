//! Ambient project context read from package.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// package.json file name
pub const PACKAGE_JSON: &str = "package.json";

/// Keyword that marks a package as an addon
const ADDON_KEYWORD: &str = "ember-addon";

/// The subset of package.json the CLI cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    pub name: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The project a command operates on
///
/// A project always has a root directory; it may or may not have a
/// package.json yet (e.g. an empty folder before `ng init`).
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    package: Option<PackageJson>,
}

impl Project {
    /// Load the project rooted at `root`, reading package.json when present
    pub fn load(root: &Path) -> Result<Self> {
        let manifest = root.join(PACKAGE_JSON);
        let package = if manifest.is_file() {
            let content = fs::read_to_string(&manifest)
                .with_context(|| format!("Failed to read {}", manifest.display()))?;
            let package: PackageJson = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", manifest.display()))?;
            Some(package)
        } else {
            None
        };

        Ok(Self {
            root: root.to_path_buf(),
            package,
        })
    }

    /// A project without package.json
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            package: None,
        }
    }

    /// A project with the given package.json contents
    #[cfg(test)]
    pub fn with_package(root: impl Into<PathBuf>, package: PackageJson) -> Self {
        Self {
            root: root.into(),
            package: Some(package),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Package name from package.json, if any
    pub fn name(&self) -> Option<&str> {
        self.package
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Whether package.json declares this project as an addon
    pub fn is_addon(&self) -> bool {
        self.package
            .as_ref()
            .is_some_and(|p| p.keywords.iter().any(|k| k == ADDON_KEYWORD))
    }
}
