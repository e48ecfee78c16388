//! Init command implementation
//!
//! `ng init` validates the package name, then runs the sub-tasks in a fixed
//! order, each gated by an option:
//!
//! ```text
//! install-blueprint → git-init → link-cli → npm-install → bower-install
//! ```
//!
//! Steps that are switched off are left out, never reordered. The first
//! failing step aborts the rest; nothing is rolled back.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::blueprint::{normalize_blueprint, ADDON_BLUEPRINT, DEFAULT_BLUEPRINT};
use crate::config::{valid_project_name, InitDefaults, NgConfig, Project};
use crate::error::NgError;
use crate::tasks::{BlueprintOptions, GitInitOptions, InstallOptions, Step, StepRunner, SystemRunner};
use crate::utils::{paths, terminal};

/// Options shared by `ng init` and `ng new`
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Show what would be generated; never writes files or installs packages
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Blueprint name, or a path starting with '.'
    #[arg(short = 'b', long)]
    pub blueprint: Option<String>,

    /// Link the CLI package into the project with `npm link`
    #[arg(long, visible_alias = "lc", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub link_cli: Option<bool>,

    /// Skip `npm install`
    #[arg(long, visible_alias = "sn", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skip_npm: Option<bool>,

    /// Skip `bower install` (default: true; use --skip-bower=false to run it)
    #[arg(long, visible_alias = "sb", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skip_bower: Option<bool>,

    /// Skip git repository initialization
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skip_git: Option<bool>,

    /// Directory for application sources [default: src]
    #[arg(long, visible_alias = "sd")]
    pub source_dir: Option<String>,

    /// Stylesheet format [default: css]
    #[arg(long)]
    pub style: Option<String>,

    /// Prefix for component selectors [default: app]
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// Generate the mobile variant of the blueprint
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub mobile: Option<bool>,
}

impl InitArgs {
    /// Merge command-line values with ng.toml defaults and built-in defaults
    pub fn resolve(
        &self,
        defaults: &InitDefaults,
        verbose: bool,
        name: String,
        raw_args: Vec<String>,
    ) -> InitOptions {
        fn pick<T: Clone>(cli: &Option<T>, config: &Option<T>, fallback: T) -> T {
            cli.clone().or_else(|| config.clone()).unwrap_or(fallback)
        }

        InitOptions {
            dry_run: self.dry_run,
            verbose,
            blueprint: self.blueprint.clone().or_else(|| defaults.blueprint.clone()),
            link_cli: pick(&self.link_cli, &defaults.link_cli, false),
            skip_npm: pick(&self.skip_npm, &defaults.skip_npm, false),
            skip_bower: pick(&self.skip_bower, &defaults.skip_bower, true),
            skip_git: self.skip_git,
            name,
            source_dir: pick(&self.source_dir, &defaults.source_dir, "src".to_string()),
            style: pick(&self.style, &defaults.style, "css".to_string()),
            prefix: pick(&self.prefix, &defaults.prefix, "app".to_string()),
            mobile: pick(&self.mobile, &defaults.mobile, false),
            raw_args,
        }
    }
}

/// Fully resolved init configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub dry_run: bool,
    pub verbose: bool,
    pub blueprint: Option<String>,
    pub link_cli: bool,
    pub skip_npm: bool,
    pub skip_bower: bool,
    /// `None` and `Some(true)` both skip git; only `Some(false)` runs it
    pub skip_git: Option<bool>,
    /// Explicit package name, `""` when not given
    pub name: String,
    pub source_dir: String,
    pub style: String,
    pub prefix: String,
    pub mobile: bool,
    /// Positional glob patterns
    pub raw_args: Vec<String>,
}

impl Default for InitOptions {
    fn default() -> Self {
        InitArgs::default().resolve(&InitDefaults::default(), false, String::new(), Vec::new())
    }
}

/// Where an init run happens
#[derive(Debug, Clone, Copy)]
pub struct InitContext<'a> {
    /// Name of the invoking command, used in error messages
    pub command: &'a str,
    /// Project the blueprint is installed into
    pub project: &'a Project,
    /// Directory relative blueprint paths are resolved against
    pub cwd: &'a Path,
}

/// Validate options and produce the ordered list of steps to run
pub fn plan(mut options: InitOptions, ctx: InitContext<'_>) -> Result<Vec<Step>, NgError> {
    if options.dry_run {
        options.skip_npm = true;
        options.skip_bower = true;
    }

    let package_name = match options.name.as_str() {
        "" | "." => ctx.project.name().map(str::to_string),
        name => Some(name.to_string()),
    }
    .ok_or_else(|| NgError::missing_package_name(ctx.command))?;

    let blueprint = options.blueprint.clone().unwrap_or_else(|| {
        if ctx.project.is_addon() {
            ADDON_BLUEPRINT.to_string()
        } else {
            DEFAULT_BLUEPRINT.to_string()
        }
    });

    if !valid_project_name(&package_name) {
        return Err(NgError::invalid_package_name(package_name));
    }

    let blueprint_options = BlueprintOptions {
        dry_run: options.dry_run,
        blueprint: normalize_blueprint(&blueprint, ctx.cwd),
        raw_name: package_name,
        target_files: options.raw_args.clone(),
        raw_args: options.raw_args.join(","),
        source_dir: options.source_dir,
        style: options.style,
        prefix: options.prefix,
        mobile: options.mobile,
    };

    let install = InstallOptions {
        verbose: options.verbose,
        optional: Some(false),
    };

    let mut steps = vec![Step::InstallBlueprint(blueprint_options)];

    if options.skip_git == Some(false) {
        steps.push(Step::GitInit(GitInitOptions {
            dry_run: options.dry_run,
            verbose: options.verbose,
        }));
    }

    if options.link_cli {
        steps.push(Step::LinkCli(install));
    }

    if !options.skip_npm {
        steps.push(Step::NpmInstall(install));
    }

    if !options.skip_bower {
        steps.push(Step::BowerInstall(InstallOptions {
            verbose: options.verbose,
            optional: None,
        }));
    }

    Ok(steps)
}

/// Plan, then run every step in order, stopping at the first failure
pub fn run(options: InitOptions, ctx: InitContext<'_>, runner: &mut dyn StepRunner) -> Result<()> {
    let steps = plan(options, ctx)?;
    for step in &steps {
        runner.run(step)?;
    }
    Ok(())
}

/// Creates a new project in the current folder
#[derive(Args, Debug)]
pub struct InitCommand {
    #[command(flatten)]
    pub args: InitArgs,

    /// Package name (defaults to the name in package.json)
    #[arg(short = 'n', long, default_value = "")]
    pub name: String,

    /// Only install blueprint files matching these patterns
    #[arg(value_name = "GLOB_PATTERN")]
    pub glob_patterns: Vec<String>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let cwd = paths::current_dir()?;
        let project = Project::load(&cwd)?;
        let config = NgConfig::load(&cwd)?;

        let options = self
            .args
            .resolve(&config.defaults, verbose, self.name, self.glob_patterns);
        if options.dry_run {
            terminal::print_info("Dry run: no files will be written and no packages installed");
        }

        let ctx = InitContext {
            command: "init",
            project: &project,
            cwd: &cwd,
        };
        let mut runner = SystemRunner::new(project.root(), verbose);
        run(options, ctx, &mut runner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::BlueprintRef;
    use crate::config::project::PackageJson;
    use anyhow::bail;
    use std::path::PathBuf;

    /// Records step names; optionally fails at one of them
    #[derive(Default)]
    struct RecordingRunner {
        ran: Vec<Step>,
        fail_at: Option<&'static str>,
    }

    impl RecordingRunner {
        fn names(&self) -> Vec<&'static str> {
            self.ran.iter().map(Step::name).collect()
        }
    }

    impl StepRunner for RecordingRunner {
        fn run(&mut self, step: &Step) -> Result<()> {
            self.ran.push(step.clone());
            if self.fail_at == Some(step.name()) {
                bail!("{} exploded", step.name());
            }
            Ok(())
        }
    }

    fn project(name: Option<&str>) -> Project {
        Project::with_package(
            "/work",
            PackageJson {
                name: name.map(str::to_string),
                keywords: vec![],
            },
        )
    }

    fn addon_project() -> Project {
        Project::with_package(
            "/work",
            PackageJson {
                name: Some("my-addon".to_string()),
                keywords: vec!["ember-addon".to_string()],
            },
        )
    }

    fn ctx(project: &Project) -> InitContext<'_> {
        InitContext {
            command: "init",
            project,
            cwd: Path::new("/work"),
        }
    }

    fn named(name: &str) -> InitOptions {
        InitOptions {
            name: name.to_string(),
            ..InitOptions::default()
        }
    }

    fn blueprint_options(steps: &[Step]) -> &BlueprintOptions {
        match &steps[0] {
            Step::InstallBlueprint(options) => options,
            other => panic!("first step should install the blueprint, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_match_cli_table() {
        let options = InitOptions::default();
        assert!(!options.dry_run);
        assert!(!options.link_cli);
        assert!(!options.skip_npm);
        assert!(options.skip_bower);
        assert_eq!(options.skip_git, None);
        assert_eq!(options.name, "");
        assert_eq!(options.source_dir, "src");
        assert_eq!(options.style, "css");
        assert_eq!(options.prefix, "app");
        assert!(!options.mobile);
    }

    #[test]
    fn test_missing_name_fails_before_any_step() {
        let project = Project::empty("/work");
        let mut runner = RecordingRunner::default();

        let err = run(InitOptions::default(), ctx(&project), &mut runner).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NgError>(),
            Some(NgError::MissingPackageName { command }) if command == "init"
        ));
        assert!(runner.ran.is_empty());
    }

    #[test]
    fn test_missing_name_message_uses_invoking_command() {
        let project = Project::empty("/work");
        let err = plan(
            InitOptions::default(),
            InitContext {
                command: "new",
                ..ctx(&project)
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("`ng new`"));
    }

    #[test]
    fn test_invalid_name_fails_before_blueprint_install() {
        let project = project(None);
        let mut runner = RecordingRunner::default();

        let err = run(named("my.app"), ctx(&project), &mut runner).unwrap_err();
        match err.downcast_ref::<NgError>() {
            Some(NgError::InvalidPackageName { name }) => assert_eq!(name, "my.app"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(runner.ran.is_empty());
    }

    #[test]
    fn test_invalid_project_name_from_package_json() {
        let project = project(Some("@scope/pkg"));
        let err = plan(InitOptions::default(), ctx(&project)).unwrap_err();
        assert!(err.to_string().contains("`@scope/pkg`"));
    }

    #[test]
    fn test_dot_name_falls_back_to_project_name() {
        let project = project(Some("foo"));
        let steps = plan(named("."), ctx(&project)).unwrap();
        assert_eq!(blueprint_options(&steps).raw_name, "foo");
    }

    #[test]
    fn test_explicit_name_wins_over_project_name() {
        let project = project(Some("foo"));
        let steps = plan(named("bar"), ctx(&project)).unwrap();
        assert_eq!(blueprint_options(&steps).raw_name, "bar");
    }

    #[test]
    fn test_dot_name_without_project_name_is_missing() {
        let project = Project::empty("/work");
        let err = plan(named("."), ctx(&project)).unwrap_err();
        assert!(matches!(err, NgError::MissingPackageName { .. }));
    }

    #[test]
    fn test_dry_run_never_installs_packages() {
        let project = project(Some("foo"));
        for (skip_npm, skip_bower) in [(false, false), (true, false), (false, true), (true, true)] {
            let options = InitOptions {
                dry_run: true,
                skip_npm,
                skip_bower,
                ..InitOptions::default()
            };
            let mut runner = RecordingRunner::default();
            run(options, ctx(&project), &mut runner).unwrap();
            assert_eq!(runner.names(), vec!["install-blueprint"]);
        }
    }

    #[test]
    fn test_dry_run_is_passed_to_blueprint_and_git() {
        let project = project(Some("foo"));
        let options = InitOptions {
            dry_run: true,
            skip_git: Some(false),
            ..InitOptions::default()
        };
        let steps = plan(options, ctx(&project)).unwrap();

        assert!(blueprint_options(&steps).dry_run);
        assert_eq!(
            steps[1],
            Step::GitInit(GitInitOptions {
                dry_run: true,
                verbose: false
            })
        );
    }

    #[test]
    fn test_git_runs_only_for_explicit_false() {
        let project = project(Some("foo"));
        for (skip_git, expect_git) in [(None, false), (Some(true), false), (Some(false), true)] {
            let options = InitOptions {
                skip_git,
                skip_npm: true,
                ..InitOptions::default()
            };
            let mut runner = RecordingRunner::default();
            run(options, ctx(&project), &mut runner).unwrap();

            let git_runs = runner.names().iter().filter(|n| **n == "git-init").count();
            assert_eq!(git_runs, usize::from(expect_git), "skip_git = {:?}", skip_git);
        }
    }

    #[test]
    fn test_full_pipeline_order() {
        let project = project(Some("foo"));
        let options = InitOptions {
            skip_git: Some(false),
            link_cli: true,
            skip_npm: false,
            skip_bower: false,
            verbose: true,
            ..InitOptions::default()
        };
        let mut runner = RecordingRunner::default();
        run(options, ctx(&project), &mut runner).unwrap();

        assert_eq!(
            runner.names(),
            vec!["install-blueprint", "git-init", "link-cli", "npm-install", "bower-install"]
        );

        let required = InstallOptions {
            verbose: true,
            optional: Some(false),
        };
        assert_eq!(runner.ran[2], Step::LinkCli(required));
        assert_eq!(runner.ran[3], Step::NpmInstall(required));
        assert_eq!(
            runner.ran[4],
            Step::BowerInstall(InstallOptions {
                verbose: true,
                optional: None
            })
        );
    }

    #[test]
    fn test_skipped_steps_are_omitted_not_reordered() {
        let project = project(Some("foo"));
        let options = InitOptions {
            link_cli: true,
            skip_npm: true,
            skip_bower: false,
            ..InitOptions::default()
        };
        let steps = plan(options, ctx(&project)).unwrap();
        let names: Vec<_> = steps.iter().map(Step::name).collect();
        assert_eq!(names, vec!["install-blueprint", "link-cli", "bower-install"]);
    }

    #[test]
    fn test_default_run_installs_blueprint_then_npm() {
        let project = project(Some("foo"));
        let steps = plan(InitOptions::default(), ctx(&project)).unwrap();
        let names: Vec<_> = steps.iter().map(Step::name).collect();
        assert_eq!(names, vec!["install-blueprint", "npm-install"]);
    }

    #[test]
    fn test_failure_aborts_later_steps() {
        let project = project(Some("foo"));
        let options = InitOptions {
            skip_git: Some(false),
            link_cli: true,
            skip_bower: false,
            ..InitOptions::default()
        };
        let mut runner = RecordingRunner {
            fail_at: Some("link-cli"),
            ..RecordingRunner::default()
        };

        let err = run(options, ctx(&project), &mut runner).unwrap_err();
        assert_eq!(err.to_string(), "link-cli exploded");
        assert_eq!(runner.names(), vec!["install-blueprint", "git-init", "link-cli"]);
    }

    #[test]
    fn test_default_blueprint_selection() {
        let app = project(Some("foo"));
        let steps = plan(InitOptions::default(), ctx(&app)).unwrap();
        assert_eq!(
            blueprint_options(&steps).blueprint,
            BlueprintRef::Named("ng2".to_string())
        );

        let addon = addon_project();
        let steps = plan(InitOptions::default(), ctx(&addon)).unwrap();
        assert_eq!(
            blueprint_options(&steps).blueprint,
            BlueprintRef::Named("addon".to_string())
        );
    }

    #[test]
    fn test_explicit_blueprint_is_normalized() {
        let addon = addon_project();
        let options = InitOptions {
            blueprint: Some("./blueprints/custom".to_string()),
            ..InitOptions::default()
        };
        let steps = plan(options, ctx(&addon)).unwrap();
        assert_eq!(
            blueprint_options(&steps).blueprint,
            BlueprintRef::Path(PathBuf::from("/work/./blueprints/custom"))
        );
    }

    #[test]
    fn test_blueprint_options_carry_scaffold_parameters() {
        let project = project(Some("foo"));
        let options = InitOptions {
            source_dir: "lib".to_string(),
            style: "scss".to_string(),
            prefix: "acme".to_string(),
            mobile: true,
            raw_args: vec!["src/**".to_string(), "*.json".to_string()],
            ..InitOptions::default()
        };
        let steps = plan(options, ctx(&project)).unwrap();
        let bp = blueprint_options(&steps);

        assert_eq!(bp.source_dir, "lib");
        assert_eq!(bp.style, "scss");
        assert_eq!(bp.prefix, "acme");
        assert!(bp.mobile);
        assert_eq!(bp.target_files, vec!["src/**", "*.json"]);
        assert_eq!(bp.raw_args, "src/**,*.json");
    }

    #[test]
    fn test_resolve_precedence() {
        let defaults = InitDefaults {
            style: Some("less".to_string()),
            prefix: Some("cfg".to_string()),
            skip_bower: Some(false),
            blueprint: Some("addon".to_string()),
            ..InitDefaults::default()
        };
        let args = InitArgs {
            prefix: Some("cli".to_string()),
            ..InitArgs::default()
        };

        let options = args.resolve(&defaults, true, "foo".to_string(), vec![]);
        assert_eq!(options.prefix, "cli");
        assert_eq!(options.style, "less");
        assert_eq!(options.source_dir, "src");
        assert!(!options.skip_bower);
        assert_eq!(options.blueprint.as_deref(), Some("addon"));
        assert!(options.verbose);
        assert_eq!(options.name, "foo");
    }
}
