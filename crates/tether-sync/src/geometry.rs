//! Popup placement relative to the anchor element.

use tether_common::{PopupPosition, ScreenMetrics, ViewportRect, WindowRectSnapshot};

/// Screen position of the popup's top-left corner.
///
/// The popup sits `anchor_offset` pixels left of the anchor's left edge and
/// directly under its bottom edge. The chrome offset is added to the top
/// only when it is non-negative, which covers menu bars above the available
/// area on multi-monitor and macOS layouts.
pub fn compute_popup_position(
    anchor: &ViewportRect,
    window: &WindowRectSnapshot,
    screen: &ScreenMetrics,
    anchor_offset: i32,
) -> PopupPosition {
    let anchor_left_abs = f64::from(window.screen_x) + anchor.left;

    let chrome_offset = screen.chrome_offset();
    let mut anchor_bottom_abs = f64::from(window.screen_y) + anchor.bottom;
    if chrome_offset >= 0.0 {
        anchor_bottom_abs += chrome_offset;
    }

    PopupPosition {
        left: (anchor_left_abs - f64::from(anchor_offset)).round() as i32,
        top: anchor_bottom_abs.round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_at(screen_x: i32, screen_y: i32) -> WindowRectSnapshot {
        WindowRectSnapshot {
            screen_x,
            screen_y,
            outer_width: 800,
            outer_height: 600,
        }
    }

    fn anchor(left: f64, bottom: f64) -> ViewportRect {
        ViewportRect {
            left,
            top: bottom - 20.0,
            right: left + 100.0,
            bottom,
        }
    }

    #[test]
    fn negative_chrome_offset_is_ignored() {
        let screen = ScreenMetrics {
            avail_top: -1.0,
            device_pixel_ratio: 1.0,
        };
        let pos = compute_popup_position(&anchor(50.0, 80.0), &window_at(0, 0), &screen, 100);
        assert_eq!(pos, PopupPosition::new(-50, 80));
    }

    #[test]
    fn positive_chrome_offset_is_scaled_and_added() {
        let screen = ScreenMetrics {
            avail_top: 25.0,
            device_pixel_ratio: 2.0,
        };
        let pos = compute_popup_position(&anchor(50.0, 80.0), &window_at(0, 0), &screen, 100);
        assert_eq!(pos, PopupPosition::new(-50, 130));
    }

    #[test]
    fn zero_chrome_offset_leaves_top_unchanged() {
        let pos = compute_popup_position(
            &anchor(50.0, 80.0),
            &window_at(0, 0),
            &ScreenMetrics::default(),
            100,
        );
        assert_eq!(pos, PopupPosition::new(-50, 80));
    }

    #[test]
    fn window_origin_translates_result() {
        let screen = ScreenMetrics {
            avail_top: -1.0,
            device_pixel_ratio: 1.0,
        };
        for (x, y) in [(0, 0), (1920, 0), (-1280, 300), (37, -12)] {
            let pos = compute_popup_position(&anchor(160.0, 152.0), &window_at(x, y), &screen, 100);
            assert_eq!(pos.left, x + 160 - 100);
            assert_eq!(pos.top, y + 152);
        }
    }

    #[test]
    fn anchor_offset_is_configurable() {
        let pos = compute_popup_position(
            &anchor(50.0, 80.0),
            &window_at(10, 10),
            &ScreenMetrics::default(),
            0,
        );
        assert_eq!(pos, PopupPosition::new(60, 90));
    }

    #[test]
    fn fractional_anchor_rounds() {
        let pos = compute_popup_position(
            &anchor(50.6, 80.4),
            &window_at(0, 0),
            &ScreenMetrics::default(),
            100,
        );
        assert_eq!(pos, PopupPosition::new(-49, 80));
    }
}
