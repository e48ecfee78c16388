//! Package installation via npm and bower

use std::path::Path;

use anyhow::{bail, Result};

use super::{run_tool, InstallOptions, Task};
use crate::exec::subprocess::Invocation;
use crate::utils::terminal;
use crate::utils::tools::require_tool;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Bower,
}

impl PackageManager {
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Bower => "bower",
        }
    }

    fn args(self, options: &InstallOptions) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        match self {
            PackageManager::Npm => {
                if !options.verbose {
                    args.extend(["--loglevel".to_string(), "error".to_string()]);
                }
                if options.optional == Some(false) {
                    args.push("--no-optional".to_string());
                }
            }
            PackageManager::Bower => {
                if options.verbose {
                    args.push("--verbose".to_string());
                }
            }
        }
        args
    }
}

/// `npm install` / `bower install` in the project root
pub struct PackageInstall<'a> {
    project_root: &'a Path,
    manager: PackageManager,
    program: &'a str,
}

impl<'a> PackageInstall<'a> {
    pub fn new(project_root: &'a Path, manager: PackageManager) -> Self {
        Self {
            project_root,
            manager,
            program: manager.program(),
        }
    }

    pub fn npm(project_root: &'a Path) -> Self {
        Self::new(project_root, PackageManager::Npm)
    }

    pub fn bower(project_root: &'a Path) -> Self {
        Self::new(project_root, PackageManager::Bower)
    }

    /// Use a different executable for the package manager
    #[cfg(test)]
    pub fn with_program(mut self, program: &'a str) -> Self {
        self.program = program;
        self
    }
}

impl Task for PackageInstall<'_> {
    type Options = InstallOptions;

    fn run(&self, options: &InstallOptions) -> Result<()> {
        let tool = self.manager.program();
        let info = require_tool(self.program, &format!("installing {} packages", tool))?;
        if options.verbose {
            eprintln!("Using {} at {}", info.name, info.path.display());
        }

        let mut invocation = Invocation::new(self.program, self.project_root);
        for arg in self.manager.args(options) {
            invocation = invocation.arg(arg);
        }

        let message = format!("Installing packages for tooling via {}...", tool);
        let result = run_tool(invocation, options.verbose, &message)?;
        if !result.success {
            bail!("{} install failed: {}", tool, result.failure_summary());
        }

        terminal::print_success(&format!("Installed packages for tooling via {}.", tool));
        Ok(())
    }
}
