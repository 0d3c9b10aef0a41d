//! The entry resolution engine.
//!
//! Reconciles three independently structured inputs (scanned
//! directory trees, explicitly configured paths, and live tmux
//! session state) into one deduplicated table of display names.
//! Per-entry and per-source failures are absorbed (warned, skipped);
//! the engine itself never fails an invocation.

use crate::config::Config;
use crate::paths::resolve_path;
use crate::scan::scan_subdirs;
use crate::tmux::TmuxAdapter;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// What a chosen entry resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryTarget {
    /// A directory to turn into a new session.
    Directory(PathBuf),
    /// An already-running session to attach to.
    LiveSession(String),
}

/// Final display-name table for one invocation. `BTreeMap` keeps
/// iteration deterministic; presentation order is applied separately
/// by [`sort_for_picker`].
pub type EntryTable = BTreeMap<String, EntryTarget>;

/// A path admitted into the current resolution pass, tagged with the
/// display prefix of the source it came from.
#[derive(Debug, Clone)]
struct CandidatePath {
    path: PathBuf,
    prefix: String,
}

/// Scratch state for one resolution pass. Candidates are kept in
/// admission order; the base-name counts drive disambiguation and are
/// never iterated, so map ordering cannot leak into the output.
#[derive(Default)]
struct ResolutionPass {
    candidates: Vec<CandidatePath>,
    base_name_counts: HashMap<String, usize>,
}

/// Builds the entry table for one invocation.
///
/// Construction takes the configuration and tmux state explicitly;
/// there is no ambient global to consult.
pub struct EntryResolver<'a> {
    config: &'a Config,
    tmux: &'a dyn TmuxAdapter,
}

impl<'a> EntryResolver<'a> {
    pub fn new(config: &'a Config, tmux: &'a dyn TmuxAdapter) -> Self {
        Self { config, tmux }
    }

    /// Runs one full resolution pass.
    ///
    /// `depth_override` is the per-invocation flag value, which takes
    /// precedence over per-source and default depths.
    pub fn resolve_entries(&self, depth_override: Option<u32>) -> EntryTable {
        let active_sessions = self.tmux.active_sessions();
        let current_session = self.tmux.current_session();
        let ignore_set = build_ignore_set(&self.config.ignore_dirs);

        let mut pass = ResolutionPass::default();

        for scan_dir in &self.config.scan_dirs {
            let prefix = scan_dir.alias.as_deref().unwrap_or("");

            let resolved = match resolve_path(&scan_dir.path) {
                Ok(path) => path,
                Err(err) => {
                    tracing::warn!(path = %scan_dir.path, error = %err, "skipping scan directory");
                    continue;
                }
            };

            let depth = scan_dir.effective_depth(depth_override, self.config.default_depth);
            let subdirs = match scan_subdirs(&resolved, depth) {
                Ok(subdirs) => subdirs,
                Err(err) => {
                    tracing::warn!(root = %resolved.display(), error = %err, "skipping scan directory");
                    continue;
                }
            };

            for subdir in subdirs {
                self.admit(
                    &subdir.to_string_lossy(),
                    prefix,
                    &ignore_set,
                    current_session.as_deref(),
                    &mut pass,
                );
            }
        }

        for entry_dir in &self.config.entry_dirs {
            self.admit(
                entry_dir,
                "",
                &ignore_set,
                current_session.as_deref(),
                &mut pass,
            );
        }

        let mut entries = EntryTable::new();

        for candidate in &pass.candidates {
            let name = display_name(candidate, &pass.base_name_counts);

            // A directory entry must never shadow a live session with
            // the same effective name; those are added below.
            if Some(name.as_str()) == current_session.as_deref()
                || active_sessions.contains(&name)
            {
                continue;
            }

            entries.insert(name, EntryTarget::Directory(candidate.path.clone()));
        }

        // Live sessions go in last under the configured prefix, which
        // keeps them out of the directory namespace entirely.
        for session_name in &active_sessions {
            if Some(session_name.as_str()) == current_session.as_deref() {
                continue;
            }

            entries.insert(
                format!("{}{}", self.config.tmux_session_prefix, session_name),
                EntryTarget::LiveSession(session_name.clone()),
            );
        }

        entries
    }

    /// The admit step: resolve, filter, and record one candidate.
    ///
    /// A directory whose base name equals the current session name is
    /// dropped here, before naming, to avoid offering the caller a
    /// path back into its own session.
    fn admit(
        &self,
        raw_path: &str,
        prefix: &str,
        ignore_set: &HashSet<PathBuf>,
        current_session: Option<&str>,
        pass: &mut ResolutionPass,
    ) {
        let resolved = match resolve_path(raw_path) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(path = raw_path, error = %err, "skipping entry");
                return;
            }
        };

        if ignore_set.contains(&resolved) {
            return;
        }

        let base_name = base_name_of(&resolved);
        if current_session == Some(base_name.as_str()) {
            return;
        }

        *pass.base_name_counts.entry(base_name).or_insert(0) += 1;
        pass.candidates.push(CandidatePath {
            path: resolved,
            prefix: prefix.to_string(),
        });
    }
}

/// Resolves the configured ignore paths. A path that cannot be
/// resolved cannot match anything, so failures are simply dropped.
fn build_ignore_set(ignore_dirs: &[String]) -> HashSet<PathBuf> {
    ignore_dirs
        .iter()
        .filter_map(|dir| resolve_path(dir).ok())
        .collect()
}

/// Computes the display name for one candidate.
///
/// Deterministic over the candidate set: the base-name count lookup is
/// by exact key, so neither admission order nor map iteration order
/// affects the result. Candidates sharing a base name get the parent
/// directory appended; a source alias is prepended after that.
fn display_name(candidate: &CandidatePath, base_name_counts: &HashMap<String, usize>) -> String {
    let base_name = base_name_of(&candidate.path);

    let mut name = if base_name_counts.get(&base_name).copied().unwrap_or(0) > 1 {
        let parent = candidate
            .path
            .parent()
            .map(base_name_of)
            .unwrap_or_default();
        format!("{base_name} ({parent})")
    } else {
        base_name
    };

    if !candidate.prefix.is_empty() {
        name = format!("{}/{}", candidate.prefix, name);
    }

    name
}

fn base_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Orders names for presentation: live-session entries first, then
/// lexicographic within each group.
pub fn sort_for_picker(names: &mut [String], session_prefix: &str) {
    names.sort_by(|a, b| {
        let a_live = a.starts_with(session_prefix);
        let b_live = b.starts_with(session_prefix);
        b_live.cmp(&a_live).then_with(|| a.cmp(b))
    });
}
