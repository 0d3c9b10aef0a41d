//! Interactive selection via fzf.
//!
//! Cancellation is a first-class outcome, not an error and not a
//! sentinel string: fzf exiting via Esc/Ctrl-C (or with nothing
//! selected) maps to [`PickOutcome::Cancelled`] and the caller exits
//! silently.

use std::io::Write;
use std::process::{Command, Stdio};

/// Result of one picker round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Choice(String),
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("failed to launch fzf: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to feed entries to fzf: {0}")]
    Io(#[from] std::io::Error),

    #[error("fzf exited abnormally (code {0:?})")]
    Abnormal(Option<i32>),
}

/// Presents `names` in fzf and returns the user's selection.
///
/// fzf draws on the terminal directly, so only stdin/stdout are
/// piped here.
pub fn pick(names: &[String]) -> Result<PickOutcome, PickerError> {
    pick_with(Command::new("fzf"), names)
}

fn pick_with(mut command: Command, names: &[String]) -> Result<PickOutcome, PickerError> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(PickerError::Spawn)?;

    {
        let mut stdin = child.stdin.take().ok_or_else(|| {
            PickerError::Io(std::io::Error::other("fzf stdin unavailable"))
        })?;
        for name in names {
            if let Err(err) = writeln!(stdin, "{name}") {
                // fzf closes its stdin as soon as the user cancels,
                // even mid-feed. The exit status below decides
                // whether this was a cancellation or a failure.
                if err.kind() == std::io::ErrorKind::BrokenPipe {
                    break;
                }
                return Err(PickerError::Io(err));
            }
        }
    }

    let output = child.wait_with_output()?;
    outcome_from(output.status.code(), &output.stdout)
}

/// Maps fzf's exit status and stdout to an outcome.
///
/// Exit 130 is Esc/Ctrl-C, exit 1 is "no match accepted"; both are
/// cancellations, as is a clean exit with an empty selection. Exit 2
/// (and anything else) is a real fzf failure.
fn outcome_from(status_code: Option<i32>, stdout: &[u8]) -> Result<PickOutcome, PickerError> {
    match status_code {
        Some(0) => {
            let choice = String::from_utf8_lossy(stdout).trim().to_string();
            if choice.is_empty() {
                Ok(PickOutcome::Cancelled)
            } else {
                Ok(PickOutcome::Choice(choice))
            }
        }
        Some(1) | Some(130) => Ok(PickOutcome::Cancelled),
        other => Err(PickerError::Abnormal(other)),
    }
}
