//! Config file discovery and loading.
//!
//! Lookup order: the `--config` override, then
//! `$XDG_CONFIG_HOME/sessionizer/config.toml`, then the platform
//! config directory. A missing file is a structural error here (the
//! engine cannot run without sources), unlike the per-path failures
//! the engine absorbs.

use sessionizer_core::Config;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("no config file found at {} (create one or pass --config)", .0.display())]
    NotFound(PathBuf),

    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("cannot read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("config file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default config path: `$XDG_CONFIG_HOME` wins over the platform
/// config directory when set.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("sessionizer").join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> Result<Config, ConfigFileError> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path().ok_or(ConfigFileError::NoConfigDir)?,
    };

    if !path.exists() {
        return Err(ConfigFileError::NotFound(path));
    }

    let raw = fs_err::read_to_string(&path)?;
    let config = toml::from_str(&raw).map_err(|source| ConfigFileError::Malformed {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
