//! Tool detection with install hints

use std::path::PathBuf;

use anyhow::Result;
use which::which;

use crate::error::{hints, NgError};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
}

/// Check if a tool exists and return its information
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    which(tool_name).ok().map(|path| ToolInfo {
        name: tool_name.to_string(),
        path,
    })
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<ToolInfo> {
    match check_tool(tool_name) {
        Some(info) => Ok(info),
        None => Err(NgError::missing_tool(tool_name, required_for, get_tool_hint(tool_name)).into()),
    }
}

/// Get installation hint for a tool
fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "npm" => hints::npm(),
        "bower" => hints::bower(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}
