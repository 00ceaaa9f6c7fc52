use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no config directory on this platform; set TETHER_CONFIG to a file path")]
    NoConfigDirectory,

    #[error("failed to write config {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window error: {0}")]
    WindowError(String),

    #[error("message channel closed: {0}")]
    ChannelClosed(String),}

#[derive(Debug, thiserror::Error)]
pub enum TetherError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("message encoding error: {0}")]
    Encoding(#[from] serde_json::Error),}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("popup.width = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: popup.width = 0 is out of range"
        );
    }

    #[test]
    fn config_location_errors_name_the_way_out() {
        let err = ConfigError::NoConfigDirectory;
        assert!(err.to_string().contains("TETHER_CONFIG"));

        let err = ConfigError::WriteError {
            path: PathBuf::from("/ro/tether/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write config /ro/tether/config.toml: read-only"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ChannelClosed("event loop gone".into());
        assert_eq!(err.to_string(), "message channel closed: event loop gone");

        let err = PlatformError::WindowError("creation refused".into());
        assert_eq!(err.to_string(), "window error: creation refused");
    }

    #[test]
    fn tether_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TetherError = config_err.into();
        assert!(matches!(err, TetherError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn tether_error_from_platform() {
        let platform_err = PlatformError::WindowError("creation refused".into());
        let err: TetherError = platform_err.into();
        assert!(matches!(err, TetherError::Platform(_)));
        assert!(err.to_string().contains("creation refused"));
    }

    #[test]
    fn tether_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TetherError = io_err.into();
        assert!(matches!(err, TetherError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn tether_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: TetherError = json_err.into();
        assert!(matches!(err, TetherError::Encoding(_)));
        assert!(err.to_string().starts_with("message encoding error"));
    }
}
