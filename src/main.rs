//! ng - project scaffolding CLI
//!
//! `ng init` installs a blueprint into the current folder and then, as
//! requested, initializes git, links the CLI package and installs npm/bower
//! packages. `ng new` does the same inside a freshly created directory.
//!
//! ## Architecture
//!
//! ```text
//! cli → commands::init::plan → [Step] → tasks (blueprint, git, npm, bower)
//! ```

mod blueprint;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod tasks;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use error::NgError;
use utils::terminal;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<NgError>() {
                Some(ng_err) => ng_err.display_with_hints(),
                None => terminal::print_error(&format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}
