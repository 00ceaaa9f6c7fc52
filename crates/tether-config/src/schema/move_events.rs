//! Move notification configuration types.

use serde::{Deserialize, Serialize};

/// Where opener move notifications come from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum MoveEventMode {
    /// Native when the platform reports window moves, polyfill otherwise.
    #[default]
    Auto,
    Native,
    Polyfill,
}

impl std::str::FromStr for MoveEventMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "native" => Ok(Self::Native),
            "polyfill" => Ok(Self::Polyfill),
            other => Err(format!("unknown move event mode '{other}'")),
        }
    }
}

/// Move notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveEventsConfig {
    pub mode: MoveEventMode,
    /// Polyfill polling period in milliseconds (valid range: 1-1000).
    pub frame_interval_ms: u32,
}

impl Default for MoveEventsConfig {
    fn default() -> Self {
        Self {
            mode: MoveEventMode::Auto,
            frame_interval_ms: 16,
        }
    }
}
