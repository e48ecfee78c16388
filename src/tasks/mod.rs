//! Sub-tasks run by `ng init`
//!
//! Each task is an independent unit of work with a uniform `run(options)`
//! entry point. The init command turns its options into an ordered list of
//! [`Step`]s and hands them one at a time to a [`StepRunner`]; the runner
//! used by the binary is [`SystemRunner`], tests substitute their own.

pub mod git_init;
pub mod install_blueprint;
pub mod link_cli;
pub mod package_install;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::blueprint::BlueprintRef;
use crate::exec::subprocess::{CommandResult, Invocation};
use crate::utils::terminal;

pub use git_init::GitInit;
pub use install_blueprint::InstallBlueprint;
pub use link_cli::LinkCli;
pub use package_install::PackageInstall;

/// A unit of work with its own options type
pub trait Task {
    type Options;

    fn run(&self, options: &Self::Options) -> Result<()>;
}

/// Options for the blueprint installer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintOptions {
    pub dry_run: bool,
    pub blueprint: BlueprintRef,
    /// Resolved package name
    pub raw_name: String,
    /// Glob patterns restricting which files are installed (empty = all)
    pub target_files: Vec<String>,
    /// Positional arguments joined with `,`
    pub raw_args: String,
    pub source_dir: String,
    pub style: String,
    pub prefix: String,
    pub mobile: bool,
}

/// Options for git initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitInitOptions {
    pub dry_run: bool,
    pub verbose: bool,
}

/// Options for linking and package installation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOptions {
    pub verbose: bool,
    /// `Some(false)` excludes optional dependencies
    pub optional: Option<bool>,
}

/// One planned sub-task invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    InstallBlueprint(BlueprintOptions),
    GitInit(GitInitOptions),
    LinkCli(InstallOptions),
    NpmInstall(InstallOptions),
    BowerInstall(InstallOptions),
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::InstallBlueprint(_) => "install-blueprint",
            Step::GitInit(_) => "git-init",
            Step::LinkCli(_) => "link-cli",
            Step::NpmInstall(_) => "npm-install",
            Step::BowerInstall(_) => "bower-install",
        }
    }
}

/// Executes planned steps
pub trait StepRunner {
    fn run(&mut self, step: &Step) -> Result<()>;
}

/// Runs steps with the real task implementations against a project root
#[derive(Debug, Clone)]
pub struct SystemRunner {
    project_root: PathBuf,
    verbose: bool,
}

impl SystemRunner {
    pub fn new(project_root: &Path, verbose: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            verbose,
        }
    }
}

impl StepRunner for SystemRunner {
    fn run(&mut self, step: &Step) -> Result<()> {
        if self.verbose {
            eprintln!("Running task: {}", step.name());
        }

        let root = self.project_root.as_path();
        match step {
            Step::InstallBlueprint(options) => InstallBlueprint::new(root).run(options),
            Step::GitInit(options) => GitInit::new(root).run(options),
            Step::LinkCli(options) => LinkCli::new(root).run(options),
            Step::NpmInstall(options) => PackageInstall::npm(root).run(options),
            Step::BowerInstall(options) => PackageInstall::bower(root).run(options),
        }
    }
}

/// Run an external tool, behind a spinner unless `verbose`
///
/// Verbose runs inherit the terminal so the tool's own output is visible.
pub(crate) fn run_tool(invocation: Invocation<'_>, verbose: bool, message: &str) -> Result<CommandResult> {
    if verbose {
        terminal::print_info(message);
        return invocation.inherit_io(true).run(true);
    }

    let spinner = terminal::create_spinner(message);
    let result = invocation.run(false);
    spinner.finish_and_clear();
    result
}
