//! Reading a config file, or falling back to a freshly written default.

use crate::schema::TetherConfig;
use crate::validation;
use std::io::ErrorKind;
use std::path::Path;
use tether_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. A config that fails validation is
/// still returned, with a warning logged.
pub fn load_from_path(path: &Path) -> Result<TetherConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: TetherConfig = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("{}: {}", path.display(), e.message()))
    })?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `TETHER_CONFIG` or the platform default path
/// (`~/.config/tether/config.toml` on Linux,
/// `~/Library/Application Support/tether/config.toml` on macOS).
///
/// A missing file is created from the commented template and defaults are
/// returned.
pub fn load_default() -> Result<TetherConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

pub(super) fn load_or_create(path: &Path) -> Result<TetherConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config at {}, writing defaults", path.display());
            create_default_config(path)?;
            Ok(TetherConfig::default())
        }
        other => other,
    }
}
