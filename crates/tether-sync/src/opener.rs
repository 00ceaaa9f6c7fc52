//! Opener-side popup lifecycle.
//!
//! The controller owns the only handle to the popup. Every operation that
//! needs the popup checks the handle first and degrades to a log line when
//! there is none: the popup may never have been opened, or the platform may
//! have refused to create it.

use tether_common::{PopupMessage, PopupPosition};
use tether_config::PopupConfig;
use tether_platform::{MoveSource, OpenerSurface, PopupChannel, PopupFeatures, PopupLauncher};
use tracing::{debug, info, warn};

use crate::geometry::compute_popup_position;

/// Opens, repositions and closes the popup on behalf of the opener window.
pub struct OpenerController<C: PopupChannel> {
    config: PopupConfig,
    popup: Option<C>,
}

impl<C: PopupChannel> OpenerController<C> {
    pub fn new(config: PopupConfig) -> Self {
        Self {
            config,
            popup: None,
        }
    }

    pub fn has_popup(&self) -> bool {
        self.popup.is_some()
    }

    /// Where the popup belongs for the opener's current geometry.
    pub fn popup_position<S: OpenerSurface + ?Sized>(&self, surface: &S) -> PopupPosition {
        compute_popup_position(
            &surface.anchor_rect(),
            &surface.window_rect(),
            &surface.screen_metrics(),
            self.config.anchor_offset,
        )
    }

    /// Open the popup next to the anchor and send it its first position.
    ///
    /// The stored handle is replaced by whatever the launcher returns, so a
    /// refused open leaves the controller without a popup.
    pub fn show_popup<S, L>(&mut self, surface: &S, launcher: &mut L) -> bool
    where
        S: OpenerSurface + ?Sized,
        L: PopupLauncher<Channel = C>,
    {
        let position = self.popup_position(surface);
        let features = PopupFeatures {
            name: self.config.name.clone(),
            left: position.left,
            top: position.top,
            width: self.config.width,
            height: self.config.height,
        };

        debug!(%features, name = %features.name, "opening popup");
        self.popup = launcher.open(&features);
        if self.popup.is_none() {
            info!("popup could not be opened");
            return false;
        }

        self.send(PopupMessage::Position(position))
    }

    /// Ask the popup to close itself. The handle is kept.
    pub fn hide_popup(&self) -> bool {
        self.send(PopupMessage::Close)
    }

    /// Push a fresh position after the opener moved.
    pub fn handle_move<S: OpenerSurface + ?Sized>(&self, surface: &S, source: MoveSource) -> bool {
        debug!(?source, "opener moved");
        if self.popup.is_none() {
            debug!("no popup to reposition");
            return false;
        }
        let position = self.popup_position(surface);
        self.send(PopupMessage::Position(position))
    }

    /// Teardown hook for the opener window.
    pub fn handle_unload(&self) -> bool {
        self.hide_popup()
    }

    fn send(&self, message: PopupMessage) -> bool {
        let Some(ref popup) = self.popup else {
            info!("no popup handle, dropping {message:?}");
            return false;
        };

        match popup.post(&message) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to post {message:?} to popup: {e}");
                false
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
