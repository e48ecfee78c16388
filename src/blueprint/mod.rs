//! Blueprints: named template sets used to scaffold project files
//!
//! A blueprint is referenced either by name or by path. Named blueprints are
//! looked up in this order:
//!
//! 1. `<project>/blueprints/<name>/`
//! 2. `<user data dir>/blueprints/<name>/`
//! 3. the blueprints compiled into the binary (`ng2`, `addon`)
//!
//! A directory blueprint contributes every file under `files/`, plus the
//! files under `mobile-files/` when the mobile variant is requested.

pub mod builtin;
pub mod render;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::error::NgError;
use crate::utils::paths::{absolutize, user_blueprints_dir, BLUEPRINTS_DIR};

pub use render::Locals;

/// Blueprint used when nothing else is selected
pub const DEFAULT_BLUEPRINT: &str = "ng2";

/// Blueprint used inside an addon project
pub const ADDON_BLUEPRINT: &str = "addon";

const FILES_DIR: &str = "files";
const MOBILE_FILES_DIR: &str = "mobile-files";

/// A normalized blueprint selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlueprintRef {
    /// Looked up by name in the blueprint search path
    Named(String),
    /// A blueprint directory on disk
    Path(PathBuf),
}

impl fmt::Display for BlueprintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlueprintRef::Named(name) => write!(f, "{}", name),
            BlueprintRef::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Turn a `--blueprint` value into a [`BlueprintRef`].
///
/// Values starting with `.` and absolute paths are resolved against `cwd`;
/// everything else is a blueprint name.
pub fn normalize_blueprint(blueprint: &str, cwd: &Path) -> BlueprintRef {
    let as_path = Path::new(blueprint);
    if blueprint.starts_with('.') || as_path.is_absolute() {
        BlueprintRef::Path(absolutize(cwd, as_path))
    } else {
        BlueprintRef::Named(blueprint.to_string())
    }
}

/// One template file, path relative to the project root (`/`-separated)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintFile {
    pub path: String,
    pub contents: Vec<u8>,
}

/// A loaded blueprint
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub name: String,
    pub files: Vec<BlueprintFile>,
}

impl Blueprint {
    /// Locate and load the blueprint referenced by `reference`
    pub fn lookup(reference: &BlueprintRef, project_root: &Path, mobile: bool) -> Result<Self> {
        match reference {
            BlueprintRef::Path(dir) => {
                if !dir.is_dir() {
                    return Err(NgError::UnknownBlueprint {
                        name: reference.to_string(),
                        searched: vec![dir.clone()],
                    }
                    .into());
                }
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| reference.to_string());
                Self::from_dir(&name, dir, mobile)
            }
            BlueprintRef::Named(name) => {
                let searched = search_paths(project_root)
                    .into_iter()
                    .map(|base| base.join(name))
                    .collect::<Vec<_>>();

                if let Some(dir) = searched.iter().find(|dir| dir.is_dir()) {
                    return Self::from_dir(name, dir, mobile);
                }

                if let Some(files) = builtin::files(name) {
                    return Ok(Self::from_builtin(name, files, mobile));
                }

                Err(NgError::UnknownBlueprint {
                    name: name.clone(),
                    searched,
                }
                .into())
            }
        }
    }

    /// Load a blueprint from a directory containing `files/`
    pub fn from_dir(name: &str, dir: &Path, mobile: bool) -> Result<Self> {
        let mut files = collect_files(&dir.join(FILES_DIR))?;
        if mobile {
            files.extend(collect_files(&dir.join(MOBILE_FILES_DIR))?);
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(Self {
            name: name.to_string(),
            files,
        })
    }

    fn from_builtin(name: &str, builtin_files: &[builtin::BuiltinFile], mobile: bool) -> Self {
        let files = builtin_files
            .iter()
            .filter(|f| mobile || !f.mobile_only)
            .map(|f| BlueprintFile {
                path: f.path.to_string(),
                contents: f.contents.as_bytes().to_vec(),
            })
            .collect();

        Self {
            name: name.to_string(),
            files,
        }
    }
}

/// Base directories searched for named blueprints
fn search_paths(project_root: &Path) -> Vec<PathBuf> {
    let mut paths = vec![project_root.join(BLUEPRINTS_DIR)];
    if let Some(user_dir) = user_blueprints_dir() {
        paths.push(user_dir);
    }
    paths
}

fn collect_files(root: &Path) -> Result<Vec<BlueprintFile>> {
    let mut files = Vec::new();
    if !root.is_dir() {
        return Ok(files);
    }

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", entry.path().display(), root.display()))?;
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let contents = fs::read(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;

        files.push(BlueprintFile { path, contents });
    }

    Ok(files)
}
