//! Live tmux queries and session launch orchestration.
//!
//! Inspection goes through the [`TmuxAdapter`] trait so the engine can
//! be tested against fake session state. The command-backed adapter
//! degrades to empty results when tmux is unreachable; whether the
//! binaries exist at all is the caller's precondition check, not ours.

use crate::config::{Session, SessionLayout};
use crate::error::TmuxError;
use std::collections::BTreeSet;
use std::process::Command;

/// Read-only view of the multiplexer's session state.
pub trait TmuxAdapter {
    /// Names of all currently running sessions. Empty when the server
    /// is not running or tmux is not installed.
    fn active_sessions(&self) -> BTreeSet<String>;

    /// Name of the session this process is attached to, if any.
    fn current_session(&self) -> Option<String>;
}

/// Adapter that shells out to the real tmux binary.
#[derive(Debug, Clone, Default)]
pub struct CommandTmuxAdapter;

impl TmuxAdapter for CommandTmuxAdapter {
    fn active_sessions(&self) -> BTreeSet<String> {
        run_tmux(&["list-sessions", "-F", "#{session_name}"])
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn current_session(&self) -> Option<String> {
        // display-message reports a session even when merely adjacent
        // to a server; only trust it when actually attached.
        std::env::var_os("TMUX")?;

        let name = run_tmux(&["display-message", "-p", "#{session_name}"])
            .trim()
            .to_string();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Runs tmux and returns stdout, degrading to empty output when the
/// binary is missing or the command fails (e.g. no server running).
fn run_tmux(args: &[&str]) -> String {
    match Command::new("tmux").args(args).output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).to_string()
        }
        Ok(_) => String::new(),
        Err(_) => String::new(),
    }
}

/// Creates the session if it does not exist, applies the layout, and
/// switches or attaches to it.
///
/// Inside tmux the final step is `switch-client`; outside it is
/// `attach-session`, which takes over the terminal.
pub fn create_and_switch_session(session: &Session) -> Result<(), TmuxError> {
    if !session_exists(&session.name) {
        for command in creation_commands(session) {
            run_tmux_checked(&command)?;
        }
    }

    let inside_tmux = std::env::var_os("TMUX").is_some();
    if inside_tmux {
        run_tmux_checked(&[
            "switch-client".to_string(),
            "-t".to_string(),
            session.name.clone(),
        ])
    } else {
        attach(&session.name)
    }
}

fn session_exists(name: &str) -> bool {
    Command::new("tmux")
        .args(["has-session", "-t", name])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Builds the tmux invocations that create a detached session with
/// the configured layout. Pure so the sequence is testable.
fn creation_commands(session: &Session) -> Vec<Vec<String>> {
    let mut commands = Vec::new();
    let session_path = session.path.as_ref().map(|p| p.to_string_lossy().to_string());

    let mut new_session = vec![
        "new-session".to_string(),
        "-d".to_string(),
        "-s".to_string(),
        session.name.clone(),
    ];
    if let Some(path) = &session_path {
        new_session.push("-c".to_string());
        new_session.push(path.clone());
    }
    commands.push(new_session);

    for (index, window) in session.layout.windows.iter().enumerate() {
        // tmux window indexes are 1-based under the common
        // `base-index 1` setup; address windows by name instead so the
        // sequence works regardless of the user's base-index.
        let target = format!("{}:{}", session.name, window.name);
        let window_path = window.path.as_deref().or(session_path.as_deref());

        if index == 0 {
            // new-session already created the first window; rename it.
            commands.push(vec![
                "rename-window".to_string(),
                "-t".to_string(),
                format!("{}:^", session.name),
                window.name.clone(),
            ]);
        } else {
            let mut new_window = vec![
                "new-window".to_string(),
                "-t".to_string(),
                session.name.clone(),
                "-n".to_string(),
                window.name.clone(),
            ];
            if let Some(path) = window_path {
                new_window.push("-c".to_string());
                new_window.push(path.to_string());
            }
            commands.push(new_window);
        }

        if let Some(command) = &window.command {
            commands.push(vec![
                "send-keys".to_string(),
                "-t".to_string(),
                target,
                command.clone(),
                "Enter".to_string(),
            ]);
        }
    }

    if let Some(first) = session.layout.windows.first() {
        commands.push(vec![
            "select-window".to_string(),
            "-t".to_string(),
            format!("{}:{}", session.name, first.name),
        ]);
    }

    commands
}

fn run_tmux_checked(args: &[String]) -> Result<(), TmuxError> {
    let output = Command::new("tmux")
        .args(args)
        .output()
        .map_err(TmuxError::Spawn)?;

    if output.status.success() {
        Ok(())
    } else {
        Err(TmuxError::CommandFailed {
            command: args.first().cloned().unwrap_or_default(),
            details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Attaching hands the terminal to tmux, so inherit stdio rather than
/// capturing it.
fn attach(name: &str) -> Result<(), TmuxError> {
    let status = Command::new("tmux")
        .args(["attach-session", "-t", name])
        .status()
        .map_err(TmuxError::Spawn)?;

    if status.success() {
        Ok(())
    } else {
        Err(TmuxError::CommandFailed {
            command: "attach-session".to_string(),
            details: format!("exited with {status}"),
        })
    }
}
