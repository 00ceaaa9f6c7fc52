//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level, scoped to the tether crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "tether=trace",
            LogLevel::Debug => "tether=debug",
            LogLevel::Info => "tether=info",
            LogLevel::Warning => "tether=warn",
            LogLevel::Error => "tether=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
