//! Configuration schema types for Sehat.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with sensible defaults.

use serde::{Deserialize, Serialize};

// =============================================================================
// Chat Config
// =============================================================================

/// Chat and generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Response language: English, Hindi, Marathi, Gujarati, or Rajasthani.
    /// Unrecognized names fall back to English.
    pub language: String,
    /// Sampling temperature (valid range: 0.0-1.0).
    pub temperature: f64,
    /// Completion model identifier sent to the service.
    pub model: String,
    /// Per-reply token cap.
    pub max_tokens: u32,
    /// Trailing messages sent per completion request.
    pub history_window: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            language: "English".into(),
            temperature: 0.3,
            model: "openai/gpt-3.5-turbo".into(),
            max_tokens: 500,
            history_window: 10,
        }
    }
}

// =============================================================================
// Api Config
// =============================================================================

/// Completion service credentials and attribution headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// OpenRouter API key. A `--api-key` flag takes priority over this
    /// field; the `OPENROUTER_API_KEY` environment variable is the
    /// fallback when both are unset.
    pub key: Option<String>,
    /// Value sent as the HTTP-Referer attribution header.
    pub referer: String,
    /// Value sent as the X-Title attribution header.
    pub title: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            referer: "https://github.com/sehat-ai/sehat".into(),
            title: "Sehat".into(),
        }
    }
}

// =============================================================================
// Voice Config
// =============================================================================

/// Voice input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Whether the `/voice` input path is offered at all.
    pub enabled: bool,
    /// Transcription model identifier.
    pub model: String,
    /// Seconds to wait for one utterance (valid range: 1-300).
    pub capture_timeout_secs: u64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: "whisper-1".into(),
            capture_timeout_secs: 15,
        }
    }
}

// =============================================================================
// Logging Config
// =============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

// =============================================================================
// Top-level Config
// =============================================================================

/// Top-level Sehat configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SehatConfig {
    pub chat: ChatConfig,
    pub api: ApiConfig,
    pub voice: VoiceConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_defaults() {
        let chat = ChatConfig::default();
        assert_eq!(chat.language, "English");
        assert_eq!(chat.temperature, 0.3);
        assert_eq!(chat.model, "openai/gpt-3.5-turbo");
        assert_eq!(chat.max_tokens, 500);
        assert_eq!(chat.history_window, 10);
    }

    #[test]
    fn api_defaults_have_no_key() {
        let api = ApiConfig::default();
        assert!(api.key.is_none());
        assert_eq!(api.title, "Sehat");
    }

    #[test]
    fn voice_disabled_by_default() {
        let voice = VoiceConfig::default();
        assert!(!voice.enabled);
        assert_eq!(voice.capture_timeout_secs, 15);
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: SehatConfig = toml::from_str("").unwrap();
        assert_eq!(config.chat.language, "English");
        assert_eq!(config.logging.level, "info");
    }
}
