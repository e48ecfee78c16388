//! Project context and configuration
//!
//! `Project` is the ambient project (package.json) that commands consult for
//! a default package name and addon detection. `NgConfig` holds per-project
//! defaults for init options read from `ng.toml`.

pub mod ng_toml;
pub mod project;
pub mod validation;

pub use ng_toml::{InitDefaults, NgConfig};
pub use project::Project;
pub use validation::valid_project_name;
