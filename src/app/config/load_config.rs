//! Configuration loading from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppConfig, AppError};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "POSTCRAFT_CONFIG";

/// Config file looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "postcraft.toml";

/// Where configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file the user named; it must exist.
    Explicit(PathBuf),
    /// The working-directory default; absence means built-in defaults.
    Implicit(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Implicit(path) => path,
        }
    }
}

/// Resolve the config location: `--config`, then `POSTCRAFT_CONFIG`, then `./postcraft.toml`.
pub fn resolve_config_source(explicit: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    match std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
        Some(value) => ConfigSource::Explicit(PathBuf::from(value)),
        None => ConfigSource::Implicit(PathBuf::from(DEFAULT_CONFIG_FILE)),
    }
}

/// Load and validate configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let source = resolve_config_source(explicit);
    let path = source.path();

    if !path.exists() {
        return match source {
            ConfigSource::Explicit(_) => Err(AppError::ConfigMissing(path.display().to_string())),
            ConfigSource::Implicit(_) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(AppConfig::default())
            }
        };
    }

    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}
