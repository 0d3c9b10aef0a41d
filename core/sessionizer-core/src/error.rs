//! Error types for sessionizer-core operations.
//!
//! The taxonomy separates recoverable per-entry failures from fatal
//! structural ones: `PathResolutionError` and `ScanError` are absorbed
//! by callers (skip the entry or source, optionally warn), while
//! `ConfigError` and `TmuxError` surface to the user.

use std::path::PathBuf;

/// A single path could not be resolved to canonical form.
///
/// Always recoverable: callers skip the affected entry and continue.
#[derive(Debug, thiserror::Error)]
pub enum PathResolutionError {
    #[error("no home directory available to expand {0}")]
    NoHomeDir(String),

    #[error("undefined environment variable ${var} in {path}")]
    UndefinedVar { path: String, var: String },

    #[error("cannot resolve {path}: {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A scan root itself could not be read.
///
/// Recoverable per source: the engine drops the root and keeps going.
/// Failures deeper in the tree never produce this; they are absorbed
/// by the scanner.
#[derive(Debug, thiserror::Error)]
#[error("cannot scan {root}: {source}")]
pub struct ScanError {
    pub root: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Structural configuration problems. Fatal: nothing useful can be
/// resolved without at least one source and a non-empty layout.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no directories configured for scanning")]
    NoScanSources,

    #[error("session_layout must have at least one window")]
    EmptyLayout,
}

/// A tmux command failed while creating or switching sessions.
///
/// Session *inspection* never produces this; an unreachable server
/// degrades to empty results instead.
#[derive(Debug, thiserror::Error)]
pub enum TmuxError {
    #[error("failed to run tmux: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("tmux {command} failed: {details}")]
    CommandFailed { command: String, details: String },
}
