//! Path resolution: shorthand expansion plus canonicalization.
//!
//! Every path that enters the engine goes through [`resolve_path`]
//! first, so ignore-set membership and deduplication compare
//! canonical forms. A failure here is never fatal; callers skip the
//! entry and move on.

use crate::error::PathResolutionError;
use std::path::{Path, PathBuf};

/// Resolves a raw path string to a canonical absolute path.
///
/// Expansion happens in two steps before touching the filesystem:
/// `~` (alone or as a leading component) becomes the user's home
/// directory, and `$VAR` / `${VAR}` references are substituted from
/// the environment. The expanded path is then canonicalized, which
/// resolves symlinks and requires the path to exist.
pub fn resolve_path(raw: &str) -> Result<PathBuf, PathResolutionError> {
    let expanded = expand_env(&expand_home(raw)?, raw)?;
    let path = Path::new(&expanded);
    path.canonicalize()
        .map_err(|source| PathResolutionError::Canonicalize {
            path: path.to_path_buf(),
            source,
        })
}

/// Expands a leading `~` to the home directory.
fn expand_home(raw: &str) -> Result<String, PathResolutionError> {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return Ok(raw.to_string());
    };

    let home = dirs::home_dir().ok_or_else(|| PathResolutionError::NoHomeDir(raw.to_string()))?;
    Ok(home.join(rest).to_string_lossy().to_string())
}

/// Substitutes `$VAR` and `${VAR}` references from the environment.
///
/// An unset variable is an error: silently dropping it would produce
/// a path that resolves somewhere the user did not intend.
fn expand_env(input: &str, original: &str) -> Result<String, PathResolutionError> {
    if !input.contains('$') {
        return Ok(input.to_string());
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let mut var = String::new();
        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var.push(c);
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_alphanumeric() || c == '_' {
                    var.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
        }

        if var.is_empty() {
            // A literal '$' with nothing to expand.
            out.push('$');
            continue;
        }

        match std::env::var(&var) {
            Ok(value) => out.push_str(&value),
            Err(_) => {
                return Err(PathResolutionError::UndefinedVar {
                    path: original.to_string(),
                    var,
                })
            }
        }
    }

    Ok(out)
}
