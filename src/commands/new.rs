//! New project command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::init::{run, InitArgs, InitContext};
use crate::config::{valid_project_name, NgConfig, Project};
use crate::error::NgError;
use crate::tasks::SystemRunner;
use crate::utils::{paths, terminal};

/// Create a new project directory and initialize it
#[derive(Args, Debug)]
pub struct NewCommand {
    /// Project name
    pub name: String,

    /// Directory to create (defaults to the project name)
    #[arg(long)]
    pub directory: Option<PathBuf>,

    #[command(flatten)]
    pub args: InitArgs,
}

impl NewCommand {
    /// Execute the new command
    pub fn execute(self, verbose: bool) -> Result<()> {
        if !valid_project_name(&self.name) {
            return Err(NgError::invalid_package_name(self.name).into());
        }

        let cwd = paths::current_dir()?;
        let directory = self.directory.unwrap_or_else(|| PathBuf::from(&self.name));
        let target = paths::absolutize(&cwd, &directory);

        if !paths::is_empty_or_missing(&target)? {
            return Err(NgError::DirectoryExists { path: directory }.into());
        }

        if self.args.dry_run {
            terminal::print_info(&format!(
                "Dry run: would create directory {}",
                directory.display()
            ));
        } else {
            paths::ensure_dir(&target)?;
            terminal::print_info(&format!("Created directory {}", directory.display()));
        }

        let project = Project::empty(&target);
        let config = NgConfig::load(&cwd)?;

        let mut args = self.args;
        args.skip_git = Some(args.skip_git.unwrap_or(false));
        let options = args.resolve(&config.defaults, verbose, self.name, Vec::new());

        let ctx = InitContext {
            command: "new",
            project: &project,
            cwd: &cwd,
        };
        let mut runner = SystemRunner::new(&target, verbose);
        run(options, ctx, &mut runner)
    }
}
