//! Popup window plumbing: the winit `PopupWindow`, the proxy-backed
//! `PopupChannel` and the launcher that creates the popup on demand.

use std::sync::Arc;

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::window::{Window, WindowAttributes, WindowId};

use tether_common::{PlatformError, PopupMessage};
use tether_config::PopupConfig;
use tether_platform::{PopupChannel, PopupFeatures, PopupLauncher, PopupWindow};
use tether_sync::{PopupAction, PopupController};

use super::types::AppEvent;

/// An open popup: its target name and the controller driving its window.
pub(super) struct PopupState<W: PopupWindow = WinitPopupWindow> {
    pub(super) name: String,
    pub(super) controller: PopupController<W>,
}

impl PopupState<WinitPopupWindow> {
    pub(super) fn window_id(&self) -> WindowId {
        self.controller.window().id()
    }
}

/// An open request for the same target name lands in the popup that is
/// already showing, the way a named browser window is reused.
pub(super) fn reuses_open_popup<W: PopupWindow>(
    state: Option<&PopupState<W>>,
    features: &PopupFeatures,
) -> bool {
    state.is_some_and(|s| s.name == features.name && !s.controller.is_closed())
}

/// Popup side of the channel: apply one raw message to the popup in `slot`.
///
/// A popup that closes is removed from the slot. Messages that arrive while
/// the slot is empty are dropped.
pub(super) fn deliver<W: PopupWindow>(slot: &mut Option<PopupState<W>>, raw: &str) -> PopupAction {
    let Some(state) = slot.as_mut() else {
        tracing::debug!("no popup window, dropping message");
        return PopupAction::Ignored;
    };

    let action = state.controller.handle_message(raw);
    if action == PopupAction::Closed {
        tracing::info!(name = %state.name, "Popup closed");
        *slot = None;
    }
    action
}

pub(super) struct WinitPopupWindow {
    window: Arc<Window>,
}

impl WinitPopupWindow {
    pub(super) fn new(window: Arc<Window>) -> Self {
        Self { window }
    }

    pub(super) fn id(&self) -> WindowId {
        self.window.id()
    }
}

impl PopupWindow for WinitPopupWindow {
    fn outer_width(&self) -> i32 {
        let scale = self.window.scale_factor();
        self.window.outer_size().to_logical::<f64>(scale).width.round() as i32
    }

    fn move_to(&self, left: i32, top: i32) {
        self.window
            .set_outer_position(LogicalPosition::new(f64::from(left), f64::from(top)));
    }

    // The window is destroyed when the host drops it; hide it right away.
    fn close(&self) {
        self.window.set_visible(false);
    }
}

/// Posts JSON messages to the popup through the event loop proxy.
pub struct ProxyChannel {
    proxy: EventLoopProxy<AppEvent>,
}

impl ProxyChannel {
    pub(super) fn new(proxy: EventLoopProxy<AppEvent>) -> Self {
        Self { proxy }
    }
}

impl PopupChannel for ProxyChannel {
    fn post(&self, message: &PopupMessage) -> Result<(), PlatformError> {
        self.proxy
            .send_event(AppEvent::PopupMessage(message.to_json()))
            .map_err(|_| PlatformError::ChannelClosed("event loop closed".into()))
    }
}

/// Creates the popup window, or reuses the open one with the same name.
pub(super) struct WinitLauncher<'a> {
    pub(super) event_loop: &'a ActiveEventLoop,
    pub(super) popup: &'a mut Option<PopupState>,
    pub(super) proxy: &'a EventLoopProxy<AppEvent>,
    pub(super) config: &'a PopupConfig,
}

impl PopupLauncher for WinitLauncher<'_> {
    type Channel = ProxyChannel;

    fn open(&mut self, features: &PopupFeatures) -> Option<ProxyChannel> {
        if reuses_open_popup(self.popup.as_ref(), features) {
            tracing::debug!(name = %features.name, "reusing open popup");
            return Some(ProxyChannel::new(self.proxy.clone()));
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(
                f64::from(features.width),
                f64::from(features.height),
            ))
            .with_position(LogicalPosition::new(
                f64::from(features.left),
                f64::from(features.top),
            ))
            .with_resizable(false);

        let window = match self.event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::warn!("Failed to create popup window ({features}): {e}");
                return None;
            }
        };

        let controller = PopupController::new(
            WinitPopupWindow::new(window),
            self.config.chrome_compensation,
        );
        tracing::info!(
            name = %features.name,
            d_width = controller.d_width(),
            "Popup window created"
        );
        *self.popup = Some(PopupState {
            name: features.name.clone(),
            controller,
        });

        Some(ProxyChannel::new(self.proxy.clone()))
    }
}
