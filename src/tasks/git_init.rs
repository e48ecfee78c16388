//! Git repository initialization for a freshly scaffolded project

use std::path::Path;

use anyhow::{bail, Result};

use super::{GitInitOptions, Task};
use crate::exec::subprocess::{command_exists, Invocation};
use crate::error::hints;
use crate::utils::terminal;

/// Message of the first commit
pub const COMMIT_MESSAGE: &str = "chore: initial commit from ng init";

/// Author used when git has no identity configured
const FALLBACK_AUTHOR_NAME: &str = "ng-cli";
const FALLBACK_AUTHOR_EMAIL: &str = "ng-cli@localhost";

/// `git init` + initial commit
pub struct GitInit<'a> {
    project_root: &'a Path,
    git: &'a str,
}

impl<'a> GitInit<'a> {
    pub fn new(project_root: &'a Path) -> Self {
        Self {
            project_root,
            git: "git",
        }
    }

    /// Use a different git executable
    #[cfg(test)]
    pub fn with_program(mut self, git: &'a str) -> Self {
        self.git = git;
        self
    }

    fn git(&self, args: &[&str], envs: &[(&str, &str)], verbose: bool) -> Result<()> {
        let mut invocation = Invocation::new(self.git, self.project_root);
        for arg in args {
            invocation = invocation.arg(*arg);
        }
        for (key, value) in envs {
            invocation = invocation.env(*key, *value);
        }

        let result = invocation.run(verbose)?;
        if !result.success {
            bail!("git {} failed: {}", args.join(" "), result.failure_summary());
        }
        Ok(())
    }

    /// Whether commits can be made without supplying an author
    fn has_identity(&self) -> bool {
        if std::env::var_os("GIT_AUTHOR_EMAIL").is_some() {
            return true;
        }

        Invocation::new(self.git, self.project_root)
            .arg("config")
            .arg("user.email")
            .run(false)
            .map(|r| r.success && !r.stdout.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Task for GitInit<'_> {
    type Options = GitInitOptions;

    fn run(&self, options: &GitInitOptions) -> Result<()> {
        if !command_exists(self.git) {
            terminal::print_warning(&missing_git_warning());
            return Ok(());
        }

        if self.project_root.join(".git").exists() {
            terminal::print_info("Git repository already exists, skipping git init");
            return Ok(());
        }

        if options.dry_run {
            terminal::print_info("Dry run: would initialize a git repository");
            return Ok(());
        }

        self.git(&["init", "--quiet"], &[], options.verbose)?;
        self.git(&["add", "."], &[], options.verbose)?;

        let fallback_identity = [
            ("GIT_AUTHOR_NAME", FALLBACK_AUTHOR_NAME),
            ("GIT_AUTHOR_EMAIL", FALLBACK_AUTHOR_EMAIL),
            ("GIT_COMMITTER_NAME", FALLBACK_AUTHOR_NAME),
            ("GIT_COMMITTER_EMAIL", FALLBACK_AUTHOR_EMAIL),
        ];
        let envs: &[(&str, &str)] = if self.has_identity() {
            &[]
        } else {
            &fallback_identity
        };
        self.git(&["commit", "--quiet", "-m", COMMIT_MESSAGE], envs, options.verbose)?;

        terminal::print_success("Successfully initialized git.");
        Ok(())
    }
}

fn missing_git_warning() -> String {
    format!(
        "Git not found, skipping repository initialization\n{}",
        hints::git()
    )
}
