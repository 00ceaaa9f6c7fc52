//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the opener window, the popup window and the controllers
//! that keep the two in sync.

mod buttons;
mod core;
mod event_handler;
mod init;
mod opener_surface;
mod polling;
mod popup_window;
mod shutdown;
mod title;
mod types;

pub use self::core::TetherApp;
pub use types::AppEvent;
