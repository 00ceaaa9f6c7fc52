//! Platform seams between the synchronization logic and real windows.

pub mod move_support;
pub mod window;

pub use move_support::{MoveEventSupport, MoveSource};
pub use window::{OpenerSurface, PopupChannel, PopupFeatures, PopupLauncher, PopupWindow};
