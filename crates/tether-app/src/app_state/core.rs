//! TetherApp struct definition and constructor.

use std::sync::Arc;

use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use tether_config::TetherConfig;
use tether_platform::MoveSource;
use tether_sync::{MoveEmulator, OpenerController};

use super::popup_window::{PopupState, ProxyChannel};
use super::types::AppEvent;

/// Top-level application state.
pub struct TetherApp {
    pub(super) config: TetherConfig,
    pub(super) move_source: MoveSource,
    pub(super) proxy: EventLoopProxy<AppEvent>,

    // Opener side
    pub(super) opener_window: Option<Arc<Window>>,
    pub(super) opener: OpenerController<ProxyChannel>,
    pub(super) move_emulator: Option<MoveEmulator>,
    /// Last cursor position over the opener, logical pixels.
    pub(super) cursor: Option<(f64, f64)>,

    // Popup side
    pub(super) popup: Option<PopupState>,

    pub(super) should_exit: bool,
}

impl TetherApp {
    pub fn new(config: TetherConfig, move_source: MoveSource, proxy: EventLoopProxy<AppEvent>) -> Self {
        let opener = OpenerController::new(config.popup.clone());
        Self {
            config,
            move_source,
            proxy,
            opener_window: None,
            opener,
            move_emulator: None,
            cursor: None,
            popup: None,
            should_exit: false,
        }
    }
}
