//! Link the globally installed CLI package into the project

use std::path::Path;

use anyhow::{bail, Result};

use super::{run_tool, InstallOptions, Task};
use crate::exec::subprocess::Invocation;
use crate::utils::terminal;
use crate::utils::tools::require_tool;

/// Package linked into node_modules
pub const CLI_PACKAGE: &str = env!("CARGO_PKG_NAME");

/// `npm link ng-cli`
pub struct LinkCli<'a> {
    project_root: &'a Path,
    npm: &'a str,
}

impl<'a> LinkCli<'a> {
    pub fn new(project_root: &'a Path) -> Self {
        Self {
            project_root,
            npm: "npm",
        }
    }

    /// Use a different npm executable
    #[cfg(test)]
    pub fn with_program(mut self, npm: &'a str) -> Self {
        self.npm = npm;
        self
    }

    fn args(options: &InstallOptions) -> Vec<String> {
        let mut args = vec!["link".to_string(), CLI_PACKAGE.to_string()];
        if options.optional == Some(false) {
            args.push("--no-optional".to_string());
        }
        args
    }
}

impl Task for LinkCli<'_> {
    type Options = InstallOptions;

    fn run(&self, options: &InstallOptions) -> Result<()> {
        let info = require_tool(self.npm, "linking the CLI package")?;
        if options.verbose {
            eprintln!("Using {} at {}", info.name, info.path.display());
        }

        let mut invocation = Invocation::new(self.npm, self.project_root);
        for arg in Self::args(options) {
            invocation = invocation.arg(arg);
        }

        let result = run_tool(invocation, options.verbose, &format!("Linking {}...", CLI_PACKAGE))?;
        if !result.success {
            bail!("npm link {} failed: {}", CLI_PACKAGE, result.failure_summary());
        }

        terminal::print_success(&format!("Linked {}.", CLI_PACKAGE));
        Ok(())
    }
}
