//! Blueprint installation: render a blueprint into the project root

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;

use super::{BlueprintOptions, Task};
use crate::blueprint::{Blueprint, Locals};
use crate::utils::paths::ensure_dir;
use crate::utils::terminal::{self, FileStatus};

/// Counts of what happened to each blueprint file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub created: usize,
    pub identical: usize,
    pub skipped: usize,
}

impl InstallSummary {
    fn record(&mut self, status: FileStatus) {
        match status {
            FileStatus::Create => self.created += 1,
            FileStatus::Identical => self.identical += 1,
            FileStatus::Skip => self.skipped += 1,
        }
    }
}

/// Installs a blueprint into a project
pub struct InstallBlueprint<'a> {
    project_root: &'a Path,
}

impl<'a> InstallBlueprint<'a> {
    pub fn new(project_root: &'a Path) -> Self {
        Self { project_root }
    }

    /// Render and write the blueprint, reporting a status line per file
    ///
    /// Existing files are never overwritten: identical content is reported
    /// as `identical`, differing content as `skip`.
    pub fn install(&self, options: &BlueprintOptions) -> Result<InstallSummary> {
        let blueprint = Blueprint::lookup(&options.blueprint, self.project_root, options.mobile)?;
        let filters = compile_patterns(&options.target_files)?;
        let locals = Locals::new(
            &options.raw_name,
            &options.source_dir,
            &options.prefix,
            &options.style,
            options.mobile,
        );

        terminal::print_info(&format!(
            "Installing blueprint '{}' for {}{}",
            blueprint.name,
            options.raw_name,
            if options.dry_run { " (dry run)" } else { "" }
        ));
        if !options.raw_args.is_empty() {
            terminal::print_info(&format!("Only installing files matching {}", options.raw_args));
        }

        let mut summary = InstallSummary::default();
        for file in &blueprint.files {
            let relative = locals.render_path(&file.path);
            if !filters.is_empty() && !filters.iter().any(|p| p.matches(&relative)) {
                continue;
            }

            let contents = render_contents(&locals, &file.contents);
            let destination = self.project_root.join(&relative);
            let status = file_status(&destination, &contents)?;

            terminal::print_file_status(status, &relative);
            summary.record(status);

            if status == FileStatus::Create && !options.dry_run {
                if let Some(parent) = destination.parent() {
                    ensure_dir(parent)?;
                }
                fs::write(&destination, &contents)
                    .with_context(|| format!("Failed to write {}", destination.display()))?;
            }
        }

        terminal::print_info(&format!(
            "{} created, {} identical, {} skipped",
            summary.created, summary.identical, summary.skipped
        ));
        if summary.skipped > 0 {
            terminal::print_warning(&format!(
                "{} existing file(s) differ from the blueprint and were left untouched",
                summary.skipped
            ));
        }

        Ok(summary)
    }
}

impl Task for InstallBlueprint<'_> {
    type Options = BlueprintOptions;

    fn run(&self, options: &BlueprintOptions) -> Result<()> {
        self.install(options).map(|_| ())
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern '{}'", p)))
        .collect()
}

/// Text files get token substitution, binary files are copied verbatim
fn render_contents(locals: &Locals, contents: &[u8]) -> Vec<u8> {
    match std::str::from_utf8(contents) {
        Ok(text) => locals.render_content(text).into_bytes(),
        Err(_) => contents.to_vec(),
    }
}

fn file_status(destination: &Path, contents: &[u8]) -> Result<FileStatus> {
    if !destination.exists() {
        return Ok(FileStatus::Create);
    }

    let existing = fs::read(destination)
        .with_context(|| format!("Failed to read {}", destination.display()))?;
    if existing == contents {
        Ok(FileStatus::Identical)
    } else {
        Ok(FileStatus::Skip)
    }
}
