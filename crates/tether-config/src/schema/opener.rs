//! Opener window configuration types.

use serde::{Deserialize, Serialize};
use tether_common::ViewportRect;

/// A button hit region inside the opener's content area, in logical pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ButtonRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ButtonRegion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 120.0,
            height: 32.0,
        }
    }
}

impl ButtonRegion {
    pub fn rect(&self) -> ViewportRect {
        ViewportRect::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

/// Opener window settings.
///
/// `show_button` doubles as the anchor the popup is positioned against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub show_button: ButtonRegion,
    pub hide_button: ButtonRegion,
}

impl Default for OpenerConfig {
    fn default() -> Self {
        Self {
            title: "Tether".into(),
            width: 480,
            height: 320,
            show_button: ButtonRegion {
                x: 160.0,
                y: 120.0,
                ..ButtonRegion::default()
            },
            hide_button: ButtonRegion {
                x: 160.0,
                y: 168.0,
                ..ButtonRegion::default()
            },
        }
    }
}
