//! Internal types for the app state module.

/// User events delivered through the event loop proxy.
#[derive(Debug)]
pub enum AppEvent {
    /// A JSON message posted by the opener to the popup.
    PopupMessage(String),
}
