//! Keeps a popup window positioned relative to an anchor in its opener.
//!
//! - [`geometry`]: where the popup belongs for a given opener geometry.
//! - [`opener`]: popup lifecycle and position pushes on the opener side.
//! - [`popup`]: applies opener messages to the popup window.
//! - [`polyfill`]: synthesizes move notifications by polling geometry.

pub mod geometry;
pub mod opener;
pub mod polyfill;
pub mod popup;

#[cfg(test)]
pub(crate) mod testing;

pub use geometry::compute_popup_position;
pub use opener::OpenerController;
pub use polyfill::MoveEmulator;
pub use popup::{PopupAction, PopupController};
