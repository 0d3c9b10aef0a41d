//! sessionizer: open tmux sessions from scanned project directories.
//!
//! One invocation scans the configured roots, merges the result with
//! live tmux sessions, offers the combined list through fzf, and
//! creates or attaches to the chosen session.

mod config_file;
mod logging;
mod picker;
mod tools;

use clap::Parser;
use picker::PickOutcome;
use sessionizer_core::{
    create_and_switch_session, sort_for_picker, CommandTmuxAdapter, ConfigError, EntryResolver,
    EntryTarget, Session, SessionLayout, TmuxError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sessionizer")]
#[command(about = "A tool for quickly opening tmux sessions")]
#[command(version)]
struct Cli {
    /// Session to open directly, bypassing the picker
    #[arg(value_name = "SESSION")]
    session: Option<String>,

    /// Maximum traversal depth, overriding configured depths
    #[arg(short, long, value_name = "DEPTH")]
    depth: Option<u32>,

    /// Config file (default $XDG_CONFIG_HOME/sessionizer/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing required tools: {}", .0.join(", "))]
    ToolsMissing(Vec<String>),

    #[error(transparent)]
    ConfigFile(#[from] config_file::ConfigFileError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Picker(#[from] picker::PickerError),

    #[error("the name must match an existing directory entry: {0}")]
    UnknownEntry(String),

    #[error("failed to switch session: {0}")]
    Tmux(#[from] TmuxError),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "sessionizer failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let missing = tools::missing_tools();
    if !missing.is_empty() {
        return Err(CliError::ToolsMissing(missing));
    }

    let config = config_file::load(cli.config.as_deref())?;
    config.validate()?;
    config.warn_on_issues();

    tracing::debug!(
        scan_dirs = config.scan_dirs.len(),
        entry_dirs = config.entry_dirs.len(),
        ignore_dirs = config.ignore_dirs.len(),
        default_depth = config.default_depth,
        "resolving entries"
    );

    let tmux = CommandTmuxAdapter;
    let resolver = EntryResolver::new(&config, &tmux);
    let entries = resolver.resolve_entries(cli.depth);

    let (choice, from_picker) = match cli.session {
        Some(name) => (name, false),
        None => {
            let mut names: Vec<String> = entries.keys().cloned().collect();
            sort_for_picker(&mut names, &config.tmux_session_prefix);

            match picker::pick(&names)? {
                PickOutcome::Choice(choice) => (choice, true),
                PickOutcome::Cancelled => return Ok(()),
            }
        }
    };

    let session = match entries.get(&choice) {
        Some(EntryTarget::Directory(path)) => Session {
            name: choice
                .strip_prefix(&config.tmux_session_prefix)
                .unwrap_or(&choice)
                .to_string(),
            path: Some(path.clone()),
            layout: config.session_layout.clone(),
        },
        Some(EntryTarget::LiveSession(name)) => Session {
            name: name.clone(),
            path: None,
            layout: SessionLayout::default(),
        },
        // A picker choice always maps to an entry; a free-form argv
        // name is allowed through so users can start ad-hoc sessions.
        None if from_picker => return Err(CliError::UnknownEntry(choice)),
        None => Session {
            name: choice,
            path: None,
            layout: config.session_layout.clone(),
        },
    };

    create_and_switch_session(&session)?;
    Ok(())
}
