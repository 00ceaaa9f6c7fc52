//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use tether_platform::MoveSource;
use tether_sync::PopupAction;

use super::buttons::{button_for_key, hit_test, OpenerButton};
use super::core::TetherApp;
use super::opener_surface::WinitOpenerSurface;
use super::popup_window::{deliver, WinitLauncher};
use super::types::AppEvent;

impl ApplicationHandler<AppEvent> for TetherApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.opener_window.is_some() {
            return;
        }

        if !self.initialize_opener(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::PopupMessage(raw) => self.deliver_to_popup(&raw),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_opener = self
            .opener_window
            .as_ref()
            .is_some_and(|w| w.id() == window_id);
        if is_opener {
            self.opener_window_event(event_loop, event);
            return;
        }

        let is_popup = self
            .popup
            .as_ref()
            .is_some_and(|p| p.window_id() == window_id);
        if is_popup {
            if let WindowEvent::CloseRequested = event {
                tracing::info!("Popup closed by the user");
                self.popup = None;
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl TetherApp {
    fn opener_window_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Opener close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Moved(_) => {
                if self.move_source == MoveSource::Native {
                    self.dispatch_move(MoveSource::Native);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self
                    .opener_window
                    .as_ref()
                    .map_or(1.0, |w| w.scale_factor());
                let logical = position.to_logical::<f64>(scale);
                self.cursor = Some((logical.x, logical.y));
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some((x, y)) = self.cursor {
                    if let Some(button) = hit_test(&self.config.opener, x, y) {
                        self.press(event_loop, button);
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event_loop, event);
            }

            _ => {}
        }
    }

    fn handle_keyboard_input(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if let Key::Character(ref c) = event.logical_key {
            if let Some(button) = button_for_key(c.as_str()) {
                self.press(event_loop, button);
            }
        }
    }

    fn press(&mut self, event_loop: &ActiveEventLoop, button: OpenerButton) {
        tracing::debug!(?button, "opener button pressed");
        match button {
            OpenerButton::Show => self.show_popup(event_loop),
            OpenerButton::Hide => {
                self.opener.hide_popup();
            }
        }
    }

    fn show_popup(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ref window) = self.opener_window else {
            return;
        };
        let surface = WinitOpenerSurface::new(window, self.config.opener.show_button.rect());
        let mut launcher = WinitLauncher {
            event_loop,
            popup: &mut self.popup,
            proxy: &self.proxy,
            config: &self.config.popup,
        };
        self.opener.show_popup(&surface, &mut launcher);
    }

    fn deliver_to_popup(&mut self, raw: &str) {
        if let PopupAction::Moved(pos) = deliver(&mut self.popup, raw) {
            tracing::trace!(left = pos.left, top = pos.top, "popup moved");
        }
    }
}
