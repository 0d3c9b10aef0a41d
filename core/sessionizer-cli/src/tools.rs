//! Precondition checks for the external binaries this tool drives.

use std::process::Command;

const REQUIRED_TOOLS: &[&str] = &["tmux", "fzf"];

/// Verifies that every required external binary resolves on PATH.
///
/// Returns the names of the missing ones; the caller turns a
/// non-empty list into a fatal error before any scanning happens.
pub fn missing_tools() -> Vec<String> {
    REQUIRED_TOOLS
        .iter()
        .filter(|tool| which(tool).is_none())
        .map(|tool| tool.to_string())
        .collect()
}

fn which(binary: &str) -> Option<String> {
    let output = Command::new("which").arg(binary).output().ok()?;

    if output.status.success() {
        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !path.is_empty() {
            return Some(path);
        }
    }
    None
}
