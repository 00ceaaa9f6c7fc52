//! Where the config file lives, and writing the default one.
//!
//! `TETHER_CONFIG` names a config file directly. Without it the file is
//! `tether/config.toml` under the platform config directory.

use std::path::{Path, PathBuf};
use tether_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "TETHER_CONFIG";

/// Pick the config file from an explicit override or the platform config
/// directory. An empty override counts as unset.
pub fn resolve_config_path(
    env_override: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.as_os_str().is_empty()) {
        debug!("{CONFIG_PATH_ENV} points at {}", path.display());
        return Ok(path);
    }
    config_dir
        .map(|dir| dir.join("tether").join("config.toml"))
        .ok_or(ConfigError::NoConfigDirectory)
}

/// The config file for this process: `TETHER_CONFIG`, else the platform default.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(
        std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
        dirs::config_dir(),
    )
}

/// Write the commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_error)?;

    info!("created default config at {}", path.display());
    Ok(())
}
