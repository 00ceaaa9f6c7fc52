//! Popup-side message handling.

use tether_common::{PopupMessage, PopupPosition};
use tether_platform::PopupWindow;
use tracing::debug;

/// What the popup did with one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    /// The window was moved to this screen position.
    Moved(PopupPosition),
    Closed,
    Ignored,
}

/// Applies opener messages to the popup's own window.
pub struct PopupController<W: PopupWindow> {
    window: W,
    /// Horizontal correction for a window wider than the nominal popup.
    d_width: i32,
    closed: bool,
}

impl<W: PopupWindow> PopupController<W> {
    /// `chrome_compensation` is the width the opener assumes the popup has.
    pub fn new(window: W, chrome_compensation: i32) -> Self {
        let d_width = window.outer_width().saturating_sub(chrome_compensation);
        Self {
            window,
            d_width,
            closed: false,
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn d_width(&self) -> i32 {
        self.d_width
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Decode and apply one raw message.
    pub fn handle_message(&mut self, raw: &str) -> PopupAction {
        match PopupMessage::from_json(raw) {
            Some(message) => self.apply(message),
            None => {
                debug!("ignoring popup message: {raw}");
                PopupAction::Ignored
            }
        }
    }

    /// Apply one decoded message. Nothing is applied once closed.
    pub fn apply(&mut self, message: PopupMessage) -> PopupAction {
        if self.closed {
            debug!("popup already closed, ignoring {message:?}");
            return PopupAction::Ignored;
        }

        match message {
            PopupMessage::Close => {
                self.window.close();
                self.closed = true;
                PopupAction::Closed
            }
            PopupMessage::Position(target) => {
                // Extreme inputs pin to the coordinate range instead of wrapping.
                let adjusted = PopupPosition {
                    left: target.left.saturating_sub(self.d_width),
                    top: target.top,
                };
                self.window.move_to(adjusted.left, adjusted.top);
                PopupAction::Moved(adjusted)
            }
        }
    }
}
