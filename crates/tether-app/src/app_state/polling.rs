//! Per-frame move emulation and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use tether_platform::{MoveSource, OpenerSurface};
use tether_sync::MoveEmulator;

use super::core::TetherApp;
use super::opener_surface::WinitOpenerSurface;

impl TetherApp {
    /// Run the move emulator if a tick is due and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        let moved = match (self.move_emulator.as_mut(), self.opener_window.as_ref()) {
            (Some(emulator), Some(window)) if emulator.is_due(now) => {
                let surface =
                    WinitOpenerSurface::new(window, self.config.opener.show_button.rect());
                emulator.tick(now, surface.window_rect())
            }
            _ => false,
        };

        if moved {
            self.dispatch_move(MoveSource::Polyfill);
        }

        match self.move_emulator.as_ref().and_then(MoveEmulator::next_wake) {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    /// Forward a move notification, native or synthesized, to the opener.
    pub(super) fn dispatch_move(&mut self, source: MoveSource) {
        let Some(ref window) = self.opener_window else {
            return;
        };
        let surface = WinitOpenerSurface::new(window, self.config.opener.show_button.rect());
        self.opener.handle_move(&surface, source);
    }
}
