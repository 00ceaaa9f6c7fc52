//! Opener window creation and move-source setup.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use tether_platform::{MoveSource, OpenerSurface};
use tether_sync::MoveEmulator;

use super::core::TetherApp;
use super::opener_surface::WinitOpenerSurface;

impl TetherApp {
    /// Create the opener window and, when needed, start move emulation.
    /// Returns `false` if the window could not be created.
    pub(super) fn initialize_opener(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.opener.title.as_str())
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.opener.width),
                f64::from(self.config.opener.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create opener window: {e}");
                return false;
            }
        };

        if self.move_source == MoveSource::Polyfill {
            let surface =
                WinitOpenerSurface::new(&window, self.config.opener.show_button.rect());
            self.move_emulator = Some(MoveEmulator::new(
                surface.window_rect(),
                Duration::from_millis(u64::from(self.config.move_events.frame_interval_ms)),
                Instant::now(),
            ));
        }

        self.opener_window = Some(window);
        tracing::info!("Opener window created");
        true
    }
}
