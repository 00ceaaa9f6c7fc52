//! Configuration schema types for Tether.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod move_events;
mod opener;
mod popup;
mod system;

pub use move_events::*;
pub use opener::*;
pub use popup::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Tether.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TetherConfig {
    pub opener: OpenerConfig,
    pub popup: PopupConfig,
    pub move_events: MoveEventsConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: TetherConfig = toml::from_str("").unwrap();
        assert_eq!(config.popup.width, 100);
        assert_eq!(config.popup.name, "popupDemo");
        assert_eq!(config.move_events.mode, MoveEventMode::Auto);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_override_independently() {
        let toml_str = r#"
[popup]
width = 160

[move_events]
mode = "polyfill"
"#;
        let config: TetherConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.popup.width, 160);
        assert_eq!(config.popup.height, 100);
        assert_eq!(config.move_events.mode, MoveEventMode::Polyfill);
        assert_eq!(config.opener.title, "Tether");
    }
}
