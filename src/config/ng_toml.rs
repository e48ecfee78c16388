//! ng.toml configuration parsing
//!
//! An optional file at the project root that supplies default values for
//! `ng init` / `ng new` options. Explicit command-line values always win.
//!
//! ```toml
//! [defaults]
//! blueprint = "ng2"
//! source_dir = "src"
//! style = "scss"
//! prefix = "app"
//! mobile = false
//! link_cli = false
//! skip_npm = false
//! skip_bower = true
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{hints, NgError};

/// Configuration file name
pub const NG_TOML: &str = "ng.toml";

/// Root configuration from ng.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NgConfig {
    /// Default values for init options
    #[serde(default)]
    pub defaults: InitDefaults,
}

/// `[defaults]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitDefaults {
    pub blueprint: Option<String>,
    pub source_dir: Option<String>,
    pub style: Option<String>,
    pub prefix: Option<String>,
    pub mobile: Option<bool>,
    pub link_cli: Option<bool>,
    pub skip_npm: Option<bool>,
    pub skip_bower: Option<bool>,
}

impl NgConfig {
    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let config: NgConfig = toml::from_str(content).map_err(|e| {
            NgError::config_error_with_hint(
                format!("Failed to parse {}: {}", NG_TOML, e),
                Some(e.into()),
                hints::invalid_ng_toml(),
            )
        })?;
        Ok(config)
    }

    /// Load ng.toml from `root`, or defaults when the file does not exist
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(NG_TOML);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }
}
