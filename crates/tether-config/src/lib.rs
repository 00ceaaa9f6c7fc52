//! Tether configuration system.
//!
//! TOML-based configuration for the opener window, the popup and the move
//! notification source. All sections use defaults so partial configs work
//! out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ButtonRegion, LogLevel, LoggingConfig, MoveEventMode, MoveEventsConfig, OpenerConfig,
    PopupConfig, TetherConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use tether_common::ConfigError;

/// Load config from the platform default path, creating it if missing, and
/// validate the result.
pub fn load_config() -> Result<TetherConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<TetherConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TetherConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&TetherConfig::default());
        assert!(json.contains("\"opener\""));
        assert!(json.contains("\"popup\""));
        assert!(json.contains("\"move_events\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"popupDemo\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[popup]\nwidth = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&TetherConfig::default());
        let parsed: TetherConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.popup.name, "popupDemo");
        assert_eq!(parsed.move_events.frame_interval_ms, 16);
    }
}
