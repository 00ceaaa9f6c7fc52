//! `OpenerSurface` over the opener's winit window.

use winit::window::Window;

use tether_common::{ScreenMetrics, ViewportRect, WindowRectSnapshot};
use tether_platform::OpenerSurface;

/// Borrowed view of the opener window in logical pixels.
pub(super) struct WinitOpenerSurface<'a> {
    window: &'a Window,
    anchor: ViewportRect,
}

impl<'a> WinitOpenerSurface<'a> {
    pub(super) fn new(window: &'a Window, anchor: ViewportRect) -> Self {
        Self { window, anchor }
    }
}

impl OpenerSurface for WinitOpenerSurface<'_> {
    fn window_rect(&self) -> WindowRectSnapshot {
        let scale = self.window.scale_factor();
        // Wayland never reports a window position.
        let (screen_x, screen_y) = match self.window.outer_position() {
            Ok(pos) => {
                let pos = pos.to_logical::<f64>(scale);
                (pos.x.round() as i32, pos.y.round() as i32)
            }
            Err(_) => (0, 0),
        };
        let size = self.window.outer_size().to_logical::<f64>(scale);
        WindowRectSnapshot {
            screen_x,
            screen_y,
            outer_width: size.width.round() as i32,
            outer_height: size.height.round() as i32,
        }
    }

    fn anchor_rect(&self) -> ViewportRect {
        self.anchor
    }

    fn screen_metrics(&self) -> ScreenMetrics {
        let avail_top = self
            .window
            .current_monitor()
            .map(|monitor| monitor.position().to_logical::<f64>(monitor.scale_factor()).y)
            .unwrap_or(0.0);
        ScreenMetrics {
            avail_top,
            device_pixel_ratio: self.window.scale_factor(),
        }
    }
}
