//! Graceful shutdown: close the popup, stop move emulation, drop windows.

use super::core::TetherApp;

impl TetherApp {
    /// Order matters:
    /// 1. Run the opener's unload hook (posts the close message)
    /// 2. Cancel move emulation
    /// 3. Drop the popup window; the loop exits before the message arrives
    /// 4. Drop the opener window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.opener.handle_unload();

        if let Some(ref mut emulator) = self.move_emulator {
            emulator.cancel();
        }

        self.popup = None;
        self.opener_window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
