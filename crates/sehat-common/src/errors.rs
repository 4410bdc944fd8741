use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SehatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("completion error: {0}")]
    Completion(String),

    #[error("voice error: {0}")]
    Voice(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("temperature out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: temperature out of range"
        );
    }

    #[test]
    fn sehat_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SehatError = config_err.into();
        assert!(matches!(err, SehatError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn sehat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SehatError = io_err.into();
        assert!(matches!(err, SehatError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn sehat_error_other_variants() {
        let err = SehatError::Completion("model unavailable".into());
        assert_eq!(err.to_string(), "completion error: model unavailable");

        let err = SehatError::Voice("no device".into());
        assert_eq!(err.to_string(), "voice error: no device");

        let err = SehatError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
