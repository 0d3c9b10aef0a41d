//! Bounded-depth subtree enumeration for scan roots.
//!
//! Only the root being unreadable is an error; anything deeper is
//! absorbed so one permission-denied subtree cannot poison the rest
//! of the scan.

use crate::error::ScanError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerates directories under `root` up to `max_depth` levels.
///
/// Depth semantics:
/// - `0`: the root itself is the only result.
/// - `N >= 1`: all directories 1 through N levels below the root,
///   excluding the root itself.
///
/// Non-directory entries are skipped. Unreadable subtrees below the
/// root are dropped silently (logged at debug level); a [`ScanError`]
/// is returned only when the root itself cannot be read.
pub fn scan_subdirs(root: &Path, max_depth: u32) -> Result<Vec<PathBuf>, ScanError> {
    // Probe the root up front so an unreadable or missing root is
    // reported as a per-source error rather than silently absorbed.
    std::fs::read_dir(root).map_err(|source| ScanError {
        root: root.to_path_buf(),
        source,
    })?;

    if max_depth == 0 {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut dirs = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth as usize)
        .follow_links(false);

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => dirs.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(root = %root.display(), error = %err, "skipping unreadable entry");
            }
        }
    }

    Ok(dirs)
}
