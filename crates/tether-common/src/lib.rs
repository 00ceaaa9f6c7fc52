pub mod errors;
pub mod messages;
pub mod types;

pub use errors::{ConfigError, PlatformError, TetherError};
pub use messages::PopupMessage;
pub use types::{PopupPosition, ScreenMetrics, ViewportRect, WindowRectSnapshot};

pub type Result<T> = std::result::Result<T, TetherError>;
