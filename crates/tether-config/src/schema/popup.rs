//! Popup window configuration types.

use serde::{Deserialize, Serialize};

/// Popup window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Target name of the popup window; opening the same name again reuses
    /// the existing window.
    pub name: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Distance from the anchor's left edge to the popup's left edge.
    pub anchor_offset: i32,
    /// Subtracted from the popup's real outer width to get the horizontal
    /// correction applied on every move.
    pub chrome_compensation: i32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            name: "popupDemo".into(),
            title: "Popup".into(),
            width: 100,
            height: 100,
            anchor_offset: 100,
            chrome_compensation: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_defaults() {
        let config = PopupConfig::default();
        assert_eq!(config.name, "popupDemo");
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 100);
        assert_eq!(config.anchor_offset, 100);
        assert_eq!(config.chrome_compensation, 100);
    }

    #[test]
    fn popup_negative_offset_parses() {
        let config: PopupConfig = toml::from_str("anchor_offset = -20").unwrap();
        assert_eq!(config.anchor_offset, -20);
        assert_eq!(config.title, "Popup");
    }
}
