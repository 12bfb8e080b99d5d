// src/config/io.rs
//! Reading and writing `linkrank.toml`.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Config, CONFIG_FILE};
use crate::error::{RankError, Result};

/// Loads `linkrank.toml` from the working directory, falling back to defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_local() -> Result<Config> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        debug!("no {CONFIG_FILE} found, using defaults");
        Ok(Config::default())
    }
}

/// Loads a config file from an explicit path.
///
/// # Errors
/// Returns `Io` if the file cannot be read, `Toml` if it cannot be parsed.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let config = Config::parse_toml(&content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Renders the default configuration as TOML.
#[must_use]
pub fn default_toml() -> String {
    let body = toml::to_string_pretty(&Config::default()).unwrap_or_default();
    format!("# {CONFIG_FILE}\n{body}")
}

/// Writes a default config file. Returns `false` if one already exists.
///
/// # Errors
/// Returns `Io` if the write fails.
pub fn write_default(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, default_toml()).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(true)
}
