//! Screen-space geometry shared by the opener and the popup.
//!
//! All values are logical pixels. Screen coordinates are integers, the way
//! window positions are reported; rects measured inside a window's content
//! area keep their fractional part until the final popup position is
//! computed.

use serde::{Deserialize, Serialize};

/// Target screen position for the popup's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopupPosition {
    pub left: i32,
    pub top: i32,
}

impl PopupPosition {
    pub fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }
}

/// Last observed outer geometry of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRectSnapshot {
    pub screen_x: i32,
    pub screen_y: i32,
    pub outer_width: i32,
    pub outer_height: i32,
}

/// A bounding box relative to a window's content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ViewportRect {
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Edges inclusive on the top-left, exclusive on the bottom-right.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Properties of the display the opener currently sits on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    /// Top edge of the area not occupied by OS menu bars or taskbars.
    pub avail_top: f64,
    pub device_pixel_ratio: f64,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self {
            avail_top: 0.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl ScreenMetrics {
    /// Offset contributed by OS chrome above the available area.
    pub fn chrome_offset(&self) -> f64 {
        self.avail_top * self.device_pixel_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_rect_from_origin_size() {
        let r = ViewportRect::from_origin_size(10.0, 20.0, 120.0, 32.0);
        assert_eq!(r.right, 130.0);
        assert_eq!(r.bottom, 52.0);
        assert_eq!(r.left, 10.0);
        assert_eq!(r.top, 20.0);
    }

    #[test]
    fn viewport_rect_contains_edges() {
        let r = ViewportRect::from_origin_size(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.9, 9.9));
        assert!(!r.contains(10.0, 5.0));
        assert!(!r.contains(5.0, -0.1));
    }

    #[test]
    fn chrome_offset_scales_with_pixel_ratio() {
        let m = ScreenMetrics {
            avail_top: 25.0,
            device_pixel_ratio: 2.0,
        };
        assert_eq!(m.chrome_offset(), 50.0);
        assert_eq!(ScreenMetrics::default().chrome_offset(), 0.0);
    }

    #[test]
    fn popup_position_serializes_as_left_top() {
        let json = serde_json::to_value(PopupPosition::new(-50, 80)).unwrap();
        assert_eq!(json, serde_json::json!({ "left": -50, "top": 80 }));
    }
}
