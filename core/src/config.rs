//! Loading and saving stats configuration files.
//!
//! Configuration is plain TOML matching [`StatsConfig`]; every key is
//! optional. The per-user default lives under the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use moonshot_types::StatsConfig;

use crate::error::ConfigError;

/// Load a config file.
pub fn load_config(path: &Path) -> Result<StatsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a config file, replacing any existing one.
pub fn save_config(path: &Path, config: &StatsConfig) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Get the default per-user config path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("moonshot").join("stats.toml"))
}

/// Load `path` if given, else the per-user default if it exists, else defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<StatsConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "Loading default stats config");
            load_config(&path)
        }
        _ => Ok(StatsConfig::default()),
    }
}
