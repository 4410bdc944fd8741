//! Configuration validation.
//!
//! Validates numeric ranges and required strings, collecting all
//! errors into a single `ConfigError::ValidationError`.

use crate::schema::SehatConfig;
use sehat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SehatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if !(0.0..=1.0).contains(&config.chat.temperature) {
        errors.push(format!(
            "chat.temperature must be between 0.0 and 1.0 (got {})",
            config.chat.temperature
        ));
    }
    if config.chat.max_tokens == 0 {
        errors.push("chat.max_tokens must be greater than 0".into());
    }
    if config.chat.history_window == 0 {
        errors.push("chat.history_window must be greater than 0".into());
    }
    if config.chat.language.trim().is_empty() {
        errors.push("chat.language must not be empty".into());
    }
    if config.chat.model.trim().is_empty() {
        errors.push("chat.model must not be empty".into());
    }
    if !(1..=300).contains(&config.voice.capture_timeout_secs) {
        errors.push(format!(
            "voice.capture_timeout_secs must be between 1 and 300 (got {})",
            config.voice.capture_timeout_secs
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes() {
        assert!(validate(&SehatConfig::default()).is_ok());
    }

    #[test]
    fn out_of_range_temperature_fails() {
        let mut config = SehatConfig::default();
        config.chat.temperature = 1.5;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("chat.temperature"));
    }

    #[test]
    fn zero_window_and_tokens_fail() {
        let mut config = SehatConfig::default();
        config.chat.max_tokens = 0;
        config.chat.history_window = 0;
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("chat.max_tokens"));
        assert!(msg.contains("chat.history_window"));
    }

    #[test]
    fn blank_language_fails() {
        let mut config = SehatConfig::default();
        config.chat.language = "   ".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn capture_timeout_bounds() {
        let mut config = SehatConfig::default();
        config.voice.capture_timeout_secs = 0;
        assert!(validate(&config).is_err());
        config.voice.capture_timeout_secs = 301;
        assert!(validate(&config).is_err());
        config.voice.capture_timeout_secs = 300;
        assert!(validate(&config).is_ok());
    }
}
