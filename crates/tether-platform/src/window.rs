//! Window traits implemented by the host application.
//!
//! The opener side reads its own geometry through [`OpenerSurface`], opens
//! the popup through a [`PopupLauncher`] and talks to it only through the
//! [`PopupChannel`] the launcher hands back. The popup side drives its own
//! window through [`PopupWindow`].

use std::fmt;

use tether_common::{PlatformError, PopupMessage, ScreenMetrics, ViewportRect, WindowRectSnapshot};

/// Read-only view of the opener window.
pub trait OpenerSurface {
    /// Outer screen position and size of the opener.
    fn window_rect(&self) -> WindowRectSnapshot;

    /// Bounding box of the element the popup is anchored to, relative to
    /// the opener's content area.
    fn anchor_rect(&self) -> ViewportRect;

    fn screen_metrics(&self) -> ScreenMetrics;
}

/// Sending half of the opener -> popup message channel.
///
/// Delivery is fire-and-forget: `Ok` means the message was queued, not that
/// the popup acted on it.
pub trait PopupChannel {
    fn post(&self, message: &PopupMessage) -> Result<(), PlatformError>;
}

/// Opens (or reuses) the popup window.
pub trait PopupLauncher {
    type Channel: PopupChannel;

    /// Returns `None` when the window could not be created.
    fn open(&mut self, features: &PopupFeatures) -> Option<Self::Channel>;
}

/// The popup's own window.
pub trait PopupWindow {
    fn outer_width(&self) -> i32;
    fn move_to(&self, left: i32, top: i32);
    fn close(&self);
}

/// Window-open request for the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupFeatures {
    /// Target name; an open popup with the same name is reused.
    pub name: String,
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for PopupFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "popup,left={},top={},width={},height={}",
            self.left, self.top, self.width, self.height
        )
    }
}
