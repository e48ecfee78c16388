//! Subprocess execution for sub-tasks (git, npm, bower)

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        let exit_code = status.code().unwrap_or(-1);
        Self {
            success: status.success(),
            exit_code,
            stdout,
            stderr,
            duration,
        }
    }

    /// Last non-empty line of stderr (or stdout), for short failure messages
    pub fn failure_summary(&self) -> String {
        let last_line = |text: &str| {
            text.lines()
                .rev()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .map(str::to_string)
        };

        last_line(&self.stderr)
            .or_else(|| last_line(&self.stdout))
            .unwrap_or_else(|| format!("exit code {}", self.exit_code))
    }
}

/// A program invocation
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    pub program: &'a str,
    pub args: Vec<String>,
    pub cwd: &'a Path,
    pub envs: Vec<(String, String)>,
    /// Inherit stdin/stdout/stderr instead of capturing output
    pub inherit_io: bool,
}

impl<'a> Invocation<'a> {
    pub fn new(program: &'a str, cwd: &'a Path) -> Self {
        Self {
            program,
            args: Vec::new(),
            cwd,
            envs: Vec::new(),
            inherit_io: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn inherit_io(mut self, inherit: bool) -> Self {
        self.inherit_io = inherit;
        self
    }

    /// Command line as it would be typed, for verbose traces
    pub fn display(&self) -> String {
        let mut line = self.program.to_string();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(' ') {
                line.push_str(&format!("\"{}\"", arg));
            } else {
                line.push_str(arg);
            }
        }
        line
    }

    /// Run the invocation to completion
    pub fn run(&self, verbose: bool) -> Result<CommandResult> {
        if verbose {
            eprintln!("Executing: {} (in {})", self.display(), self.cwd.display());
        }
        let result = run_command(self)?;
        if verbose {
            eprintln!(
                "Finished {} in {:.1}s (exit code {})",
                self.program,
                result.duration.as_secs_f64(),
                result.exit_code
            );
        }
        Ok(result)
    }
}

/// Run a command, waiting for it to finish
pub fn run_command(invocation: &Invocation<'_>) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(invocation.program);
    cmd.args(&invocation.args);
    cmd.current_dir(invocation.cwd);
    for (key, value) in &invocation.envs {
        cmd.env(key, value);
    }

    if invocation.inherit_io {
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute {}", invocation.program))?;

        let duration = start.elapsed();
        Ok(CommandResult::from_status(
            status,
            String::new(),
            String::new(),
            duration,
        ))
    } else {
        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute {}", invocation.program))?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        Ok(CommandResult::from_status(
            output.status,
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
