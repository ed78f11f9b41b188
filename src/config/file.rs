//! Configuration file loading.

use crate::config::{Config, validate_config};
use crate::error::{Error, Result};
use std::path::Path;

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    read_config(path)
}

/// Load and validate the configuration for a run.
///
/// An explicit path must exist. Without one, the platform config file is
/// used when present and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => read_config(path)?,
        None => super::config_file_path()
            .map_or_else(|_| Ok(Config::default()), |path| load_config_file(&path))?,
    };

    validate_config(&config)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save configuration to a TOML file.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
