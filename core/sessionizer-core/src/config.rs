//! Configuration types for the sessionizer.
//!
//! The CLI loads these from a TOML file and hands the engine a
//! borrowed `Config`. There is no process-wide configuration state;
//! everything the engine needs arrives through its constructor.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration consumed by the entry resolution engine
/// and the launch orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories whose subtrees are enumerated for candidates.
    pub scan_dirs: Vec<ScanDir>,
    /// Individual directories offered as candidates without scanning.
    pub entry_dirs: Vec<String>,
    /// Directories excluded from all sources.
    pub ignore_dirs: Vec<String>,
    /// Traversal depth used when neither the flag nor the scan dir
    /// supplies one.
    pub default_depth: u32,
    /// Prefix marking entries that attach to an already-running
    /// session rather than creating a new one.
    pub tmux_session_prefix: String,
    /// Layout applied to newly created sessions.
    pub session_layout: SessionLayout,
    /// Session switched to when the last session is killed.
    pub fallback_session: FallbackSession,
    /// Editor used when opening the config file.
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_dirs: Vec::new(),
            entry_dirs: Vec::new(),
            ignore_dirs: Vec::new(),
            default_depth: 1,
            tmux_session_prefix: "[TMUX] ".to_string(),
            session_layout: SessionLayout::default(),
            fallback_session: FallbackSession::default(),
            editor: String::new(),
        }
    }
}

impl Config {
    /// Checks the structural invariants the engine relies on.
    ///
    /// Per-path problems are not validated here; those are absorbed
    /// during resolution. Only misconfigurations that make the whole
    /// invocation meaningless are fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_dirs.is_empty() && self.entry_dirs.is_empty() {
            return Err(ConfigError::NoScanSources);
        }

        if self.session_layout.windows.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }

        Ok(())
    }

    /// Warns about incomplete but non-fatal configuration.
    pub fn warn_on_issues(&self) {
        if self.editor.is_empty() {
            tracing::warn!("editor not set, defaulting to 'vi'");
        }

        if self.fallback_session.name.is_empty() {
            tracing::warn!("fallback_session.name is missing, defaulting to 'Default'");
        }

        if self.fallback_session.path.is_empty() {
            tracing::warn!("fallback_session.path is missing, defaulting to '~/'");
        }

        if self.fallback_session.layout.windows.is_empty() {
            tracing::warn!("fallback_session.layout.windows is empty, using default layout");
        }
    }
}

/// One configured scan root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDir {
    pub path: String,
    /// Display prefix prepended to names derived from this root.
    #[serde(default)]
    pub alias: Option<String>,
    /// Per-source depth, overriding `default_depth`.
    #[serde(default)]
    pub depth: Option<u32>,
}

impl ScanDir {
    /// Resolves the effective traversal depth for this root.
    ///
    /// Precedence: per-invocation flag, then the per-source depth,
    /// then the global default.
    pub fn effective_depth(&self, flag_depth: Option<u32>, default_depth: u32) -> u32 {
        flag_depth.or(self.depth).unwrap_or(default_depth)
    }
}

/// Window arrangement applied to a newly created session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionLayout {
    pub windows: Vec<WindowSpec>,
}

/// One window in a session layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSpec {
    pub name: String,
    /// Command typed into the window after creation.
    #[serde(default)]
    pub command: Option<String>,
    /// Working directory; the session path when unset.
    #[serde(default)]
    pub path: Option<String>,
}

/// Session switched to when the last session is killed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSession {
    pub name: String,
    pub path: String,
    pub layout: SessionLayout,
}

/// A fully resolved launch target handed to the orchestrator.
#[derive(Debug, Clone)]
pub struct Session {
    pub name: String,
    /// Starting directory for a new session; `None` when attaching to
    /// an existing session or creating one without a backing path.
    pub path: Option<PathBuf>,
    pub layout: SessionLayout,
}
