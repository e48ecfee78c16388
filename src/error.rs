//! Error types and helpers for user-friendly error messages
//!
//! Errors in this module are the "expected" failures of a command: they are
//! reported with a hint and a non-zero exit code, never with a backtrace.
//! Everything else travels as `anyhow::Error`.

use std::path::PathBuf;

use thiserror::Error;

/// User-facing errors with actionable hints
#[derive(Error, Debug)]
pub enum NgError {
    /// No package name could be resolved from options or package.json
    #[error(
        "The `ng {command}` command requires a package.json in current folder with name \
         attribute or a specified name via arguments. For more details, use `ng help`."
    )]
    MissingPackageName { command: String },

    /// The resolved package name is rejected by the name predicate
    #[error("We currently do not support a name of `{name}`.")]
    InvalidPackageName { name: String },

    /// Blueprint could not be located
    #[error("Unknown blueprint: {name}")]
    UnknownBlueprint { name: String, searched: Vec<PathBuf> },

    /// Tool/executable not found
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Target directory for `ng new` is already populated
    #[error("Directory '{}' already exists", path.display())]
    DirectoryExists { path: PathBuf },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },
}

impl NgError {
    pub fn missing_package_name(command: impl Into<String>) -> Self {
        Self::MissingPackageName {
            command: command.into(),
        }
    }

    pub fn invalid_package_name(name: impl Into<String>) -> Self {
        Self::InvalidPackageName { name: name.into() }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a configuration error with source and hint
    pub fn config_error_with_hint(
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    /// Hint shown below the error line, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            NgError::MissingPackageName { .. } => Some(hints::missing_package_name().to_string()),
            NgError::InvalidPackageName { .. } => Some(hints::invalid_package_name().to_string()),
            NgError::UnknownBlueprint { searched, .. } => {
                let mut hint = hints::unknown_blueprint();
                if !searched.is_empty() {
                    hint.push_str("\n\nSearched:");
                    for dir in searched {
                        hint.push_str(&format!("\n • {}", dir.display()));
                    }
                }
                Some(hint)
            }
            NgError::MissingTool {
                required_for, hint, ..
            } => Some(format!("Required for {}.\n{}", required_for, hint)),
            NgError::DirectoryExists { .. } => Some(hints::directory_exists().to_string()),
            NgError::Config { hint, .. } => hint.clone(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        if let Some(hint) = self.hint() {
            eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
        }

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    pub fn missing_package_name() -> &'static str {
        "Pass a name with --name <NAME>, or run the command in a folder whose\n\
         package.json has a \"name\" field."
    }

    pub fn invalid_package_name() -> &'static str {
        "Names must start with a letter and contain only letters, digits, '-' and '_'.\n\
         The names test, ember, ember-cli, vendor and app are reserved."
    }

    pub fn unknown_blueprint() -> String {
        format!(
            "Built-in blueprints: {}.\n\
             Custom blueprints live in <project>/blueprints/<name>/files, or pass a\n\
             path starting with '.' to --blueprint.",
            crate::blueprint::builtin::BUILTIN_NAMES.join(", ")
        )
    }

    pub fn directory_exists() -> &'static str {
        "Choose another name, pass --directory <DIR>, or run `ng init` inside\n\
         the existing directory."
    }

    /// Get hint for missing Git
    pub fn git() -> &'static str {
        "Install Git from https://git-scm.com/ or use your package manager:\n\
         • macOS: brew install git\n\
         • Ubuntu: sudo apt install git\n\
         • Windows: winget install Git.Git"
    }

    /// Get hint for missing npm
    pub fn npm() -> &'static str {
        "Install Node.js (which ships npm) from https://nodejs.org/ or use your package manager:\n\
         • macOS: brew install node\n\
         • Ubuntu: sudo apt install nodejs npm\n\
         • Windows: winget install OpenJS.NodeJS\n\
         \n\
         Or re-run with --skip-npm."
    }

    /// Get hint for missing bower
    pub fn bower() -> &'static str {
        "Install bower with: npm install -g bower\n\
         \n\
         Or re-run with --skip-bower."
    }

    pub fn invalid_ng_toml() -> &'static str {
        "ng.toml is invalid. Common issues:\n\
         • Unknown key in [defaults]\n\
         • Invalid TOML syntax (check quotes, brackets, commas)\n\
         • Wrong value type (booleans are true/false, not strings)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_package_name_mentions_command_and_help() {
        let err = NgError::missing_package_name("init");
        let message = err.to_string();
        assert!(message.contains("`ng init`"));
        assert!(message.contains("`ng help`"));
    }

    #[test]
    fn test_invalid_package_name_includes_name() {
        let err = NgError::invalid_package_name("my.app");
        assert_eq!(err.to_string(), "We currently do not support a name of `my.app`.");
    }

    #[test]
    fn test_unknown_blueprint_hint_lists_search_paths() {
        let err = NgError::UnknownBlueprint {
            name: "fancy".to_string(),
            searched: vec![PathBuf::from("/work/blueprints/fancy")],
        };
        let hint = err.hint().unwrap();
        assert!(hint.contains("ng2, addon"));
        assert!(hint.contains("/work/blueprints/fancy"));
    }
}
