//! # sessionizer-core
//!
//! Core library for the sessionizer: discovers candidate working
//! contexts (project directories plus running tmux sessions) and
//! resolves them into one deduplicated table of display names.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency.
//! - **Explicit inputs**: Configuration and tmux state are passed in;
//!   no process-wide globals.
//! - **Graceful degradation**: A bad path or unreachable tmux server
//!   shrinks the result set instead of failing the invocation.
//! - **Trait seams at process boundaries**: tmux queries go through
//!   [`tmux::TmuxAdapter`] so tests can supply fake session state.

pub mod config;
pub mod engine;
pub mod error;
pub mod paths;
pub mod scan;
pub mod tmux;

pub use config::{Config, FallbackSession, ScanDir, Session, SessionLayout, WindowSpec};
pub use engine::{sort_for_picker, EntryResolver, EntryTable, EntryTarget};
pub use error::{ConfigError, PathResolutionError, ScanError, TmuxError};
pub use paths::resolve_path;
pub use scan::scan_subdirs;
pub use tmux::{create_and_switch_session, CommandTmuxAdapter, TmuxAdapter};
