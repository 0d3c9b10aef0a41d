//! End-to-end resolution tests over real directory trees and fake
//! tmux session state.

use sessionizer_core::{
    Config, EntryResolver, EntryTarget, ScanDir, SessionLayout, TmuxAdapter, WindowSpec,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

struct FakeTmux {
    active: BTreeSet<String>,
    current: Option<String>,
}

impl FakeTmux {
    fn empty() -> Self {
        Self {
            active: BTreeSet::new(),
            current: None,
        }
    }

    fn with_sessions(active: &[&str], current: Option<&str>) -> Self {
        Self {
            active: active.iter().map(|s| s.to_string()).collect(),
            current: current.map(str::to_string),
        }
    }
}

impl TmuxAdapter for FakeTmux {
    fn active_sessions(&self) -> BTreeSet<String> {
        self.active.clone()
    }

    fn current_session(&self) -> Option<String> {
        self.current.clone()
    }
}

fn scan_dir(path: &Path) -> ScanDir {
    ScanDir {
        path: path.to_string_lossy().to_string(),
        alias: None,
        depth: None,
    }
}

fn base_config() -> Config {
    Config {
        session_layout: SessionLayout {
            windows: vec![WindowSpec {
                name: "main".to_string(),
                command: None,
                path: None,
            }],
        },
        ..Config::default()
    }
}

fn make_dirs(root: &TempDir, names: &[&str]) {
    for name in names {
        fs::create_dir_all(root.path().join(name)).unwrap();
    }
}

#[test]
fn same_base_name_across_roots_is_disambiguated_by_parent() {
    let proj = tempdir().unwrap();
    let other = tempdir().unwrap();
    make_dirs(&proj, &["a", "b"]);
    make_dirs(&other, &["a"]);

    let mut config = base_config();
    config.scan_dirs = vec![scan_dir(proj.path()), scan_dir(other.path())];

    let tmux = FakeTmux::empty();
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    let proj_parent = proj.path().file_name().unwrap().to_string_lossy();
    let other_parent = other.path().file_name().unwrap().to_string_lossy();
    assert!(entries.contains_key(&format!("a ({proj_parent})")));
    assert!(entries.contains_key(&format!("a ({other_parent})")));
    assert!(entries.contains_key("b"));
    assert!(!entries.contains_key("a"));
}

#[test]
fn three_way_collision_yields_three_distinct_names() {
    let roots = [tempdir().unwrap(), tempdir().unwrap(), tempdir().unwrap()];
    for root in &roots {
        fs::create_dir(root.path().join("app")).unwrap();
    }

    let mut config = base_config();
    config.scan_dirs = roots.iter().map(|r| scan_dir(r.path())).collect();

    let tmux = FakeTmux::empty();
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    let app_keys: Vec<_> = entries.keys().filter(|k| k.starts_with("app (")).collect();
    assert_eq!(app_keys.len(), 3);
    // BTreeMap keys are unique by construction; verify all three
    // parents are represented rather than overwritten.
    for root in &roots {
        let parent = root.path().file_name().unwrap().to_string_lossy();
        assert!(entries.contains_key(&format!("app ({parent})")));
    }
}

#[test]
fn current_session_never_appears_from_either_origin() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["work", "play"]);

    let mut config = base_config();
    config.scan_dirs = vec![scan_dir(proj.path())];

    // "work" is both a scanned directory and the caller's session.
    let tmux = FakeTmux::with_sessions(&["work", "other"], Some("work"));
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    assert!(!entries.contains_key("work"));
    assert!(!entries.contains_key("[TMUX] work"));
    assert!(entries.contains_key("play"));
    assert_eq!(
        entries.get("[TMUX] other"),
        Some(&EntryTarget::LiveSession("other".to_string()))
    );
}

#[test]
fn ignored_path_is_excluded_from_every_root() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["keep", "skip"]);

    let mut config = base_config();
    let skip_path = proj.path().join("skip");
    config.scan_dirs = vec![scan_dir(proj.path())];
    // Reachable both from the scan and as an explicit entry; neither
    // may survive the ignore set.
    config.entry_dirs = vec![skip_path.to_string_lossy().to_string()];
    config.ignore_dirs = vec![skip_path.to_string_lossy().to_string()];

    let tmux = FakeTmux::empty();
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    assert!(entries.contains_key("keep"));
    assert!(!entries.contains_key("skip"));
}

#[test]
fn directory_entry_never_shadows_an_active_session() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["api", "web"]);

    let mut config = base_config();
    config.scan_dirs = vec![scan_dir(proj.path())];

    let tmux = FakeTmux::with_sessions(&["api"], None);
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    // The bare name belongs to the live session (prefixed); the
    // directory entry is dropped rather than colliding.
    assert!(!entries.contains_key("api"));
    assert_eq!(
        entries.get("[TMUX] api"),
        Some(&EntryTarget::LiveSession("api".to_string()))
    );
    assert!(matches!(
        entries.get("web"),
        Some(EntryTarget::Directory(_))
    ));
}

#[test]
fn missing_scan_root_does_not_poison_other_sources() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["real"]);

    let mut config = base_config();
    config.scan_dirs = vec![
        ScanDir {
            path: "/does/not/exist/anywhere".to_string(),
            alias: None,
            depth: None,
        },
        scan_dir(proj.path()),
    ];

    let tmux = FakeTmux::empty();
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    assert_eq!(entries.len(), 1);
    assert!(entries.contains_key("real"));
}

#[test]
fn explicit_entries_are_admitted_without_scanning() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["standalone/nested"]);

    let mut config = base_config();
    config.entry_dirs = vec![proj
        .path()
        .join("standalone")
        .to_string_lossy()
        .to_string()];

    let tmux = FakeTmux::empty();
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    // Only the entry itself, not its children.
    assert_eq!(entries.len(), 1);
    assert!(matches!(
        entries.get("standalone"),
        Some(EntryTarget::Directory(_))
    ));
}

#[test]
fn alias_prefixes_names_from_that_root() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["api"]);

    let mut config = base_config();
    config.scan_dirs = vec![ScanDir {
        path: proj.path().to_string_lossy().to_string(),
        alias: Some("work".to_string()),
        depth: None,
    }];

    let tmux = FakeTmux::empty();
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    assert!(entries.contains_key("work/api"));
    assert!(!entries.contains_key("api"));
}

#[test]
fn depth_override_flag_limits_every_root() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["top/mid/deep"]);

    let mut config = base_config();
    config.scan_dirs = vec![ScanDir {
        path: proj.path().to_string_lossy().to_string(),
        alias: None,
        depth: Some(3),
    }];

    let tmux = FakeTmux::empty();

    let shallow = EntryResolver::new(&config, &tmux).resolve_entries(Some(1));
    assert!(shallow.contains_key("top"));
    assert!(!shallow.contains_key("mid"));

    let configured = EntryResolver::new(&config, &tmux).resolve_entries(None);
    assert!(configured.contains_key("deep"));
}

#[test]
fn resolution_is_idempotent() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["a", "b", "c/inner"]);

    let mut config = base_config();
    config.scan_dirs = vec![ScanDir {
        path: proj.path().to_string_lossy().to_string(),
        alias: None,
        depth: Some(2),
    }];

    let tmux = FakeTmux::with_sessions(&["running"], None);
    let resolver = EntryResolver::new(&config, &tmux);

    let first = resolver.resolve_entries(None);
    let second = resolver.resolve_entries(None);
    assert_eq!(first, second);
}

#[test]
fn live_sessions_carry_the_configured_prefix() {
    let proj = tempdir().unwrap();
    make_dirs(&proj, &["dir"]);

    let mut config = base_config();
    config.scan_dirs = vec![scan_dir(proj.path())];
    config.tmux_session_prefix = "TMUX/".to_string();

    let tmux = FakeTmux::with_sessions(&["gamma", "zeta"], None);
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    assert!(entries.contains_key("TMUX/gamma"));
    assert!(entries.contains_key("TMUX/zeta"));
    assert!(entries.contains_key("dir"));
}

#[test]
fn no_sources_resolve_to_live_sessions_only() {
    let mut config = base_config();
    config.entry_dirs = vec!["/nowhere/at/all".to_string()];

    let tmux = FakeTmux::with_sessions(&["solo"], None);
    let entries = EntryResolver::new(&config, &tmux).resolve_entries(None);

    assert_eq!(entries.len(), 1);
    assert!(entries.contains_key("[TMUX] solo"));
}
