//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{init::InitCommand, new::NewCommand};
use crate::utils::terminal;

/// ng - project scaffolding from blueprints
#[derive(Parser, Debug)]
#[command(name = "ng")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project in the current folder
    #[command(visible_alias = "i")]
    Init(InitCommand),

    /// Create a new project directory and initialize it
    New(NewCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            terminal::disable_colors();
        }

        match self.command {
            Commands::Init(cmd) => cmd.execute(self.verbose),
            Commands::New(cmd) => cmd.execute(self.verbose),
        }
    }
}
