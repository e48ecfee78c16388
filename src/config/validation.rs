//! Project name validation

use std::sync::OnceLock;

use regex::Regex;

/// Names that collide with directories or packages a generated project relies on
const RESERVED_NAMES: &[&str] = &["test", "ember", "ember-cli", "vendor", "app"];

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid regex"))
}

/// Check whether `name` can be used as a project/package name.
///
/// A valid name starts with an ASCII letter, continues with letters, digits,
/// `-` or `_`, and is not a reserved name (compared case-insensitively).
pub fn valid_project_name(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    if RESERVED_NAMES.contains(&lowered.as_str()) {
        return false;
    }

    name_pattern().is_match(name)
}
