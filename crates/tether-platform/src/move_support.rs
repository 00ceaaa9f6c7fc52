//! Detection of native window-move notifications.
//!
//! Windows, macOS and X11 report window moves to the application. Wayland
//! compositors do not, and neither do unknown platforms; those get the
//! polling emulation instead.

use tether_config::MoveEventMode;

/// The effective source of opener move notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Native,
    Polyfill,
}

impl MoveSource {
    /// Status text shown to the user.
    pub fn status_text(&self) -> &'static str {
        match self {
            MoveSource::Native => "Implemented",
            MoveSource::Polyfill => "Polyfill",
        }
    }
}

/// Whether the running platform delivers native move notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEventSupport {
    pub native: bool,
}

impl MoveEventSupport {
    /// Probe the current platform and session.
    pub fn detect() -> Self {
        let native = if cfg!(any(target_os = "windows", target_os = "macos")) {
            true
        } else if cfg!(unix) {
            let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
            let x11 = std::env::var_os("DISPLAY").is_some();
            unix_session_has_native_moves(wayland, x11)
        } else {
            false
        };
        tracing::debug!(native, "probed native move event support");
        Self { native }
    }

    /// Pick the move source for a configured mode.
    pub fn resolve(&self, mode: MoveEventMode) -> MoveSource {
        match mode {
            MoveEventMode::Native => MoveSource::Native,
            MoveEventMode::Polyfill => MoveSource::Polyfill,
            MoveEventMode::Auto if self.native => MoveSource::Native,
            MoveEventMode::Auto => MoveSource::Polyfill,
        }
    }
}

// winit prefers Wayland when both are present.
fn unix_session_has_native_moves(wayland: bool, x11: bool) -> bool {
    !wayland && x11
}
