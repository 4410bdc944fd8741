//! Voice input: one-shot speech capture and transcription.
//!
//! The session manager never touches voice. The presentation layer
//! calls `transcribe_once` and feeds successful text into
//! `Session::submit_user_turn` exactly like typed input; there is no
//! special-casing of voice-originated turns in the conversation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::prompt::Language;

const TRANSCRIPTION_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Failures surfaced by the voice input adapter.
///
/// These are reported as a status line by the presentation layer and
/// never mutate the conversation.
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("no audio input device available")]
    NoDevice,
    #[error("listening timed out")]
    Timeout,
    #[error("could not understand the audio")]
    Unintelligible,
    #[error("transcription service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("{0}")]
    Other(String),
}

/// One-shot speech-to-text in a hinted language.
#[async_trait]
pub trait VoiceInput: Send + Sync {
    /// Capture a single utterance and return its transcription.
    async fn transcribe_once(&self, language: Language) -> Result<String, VoiceError>;
}

/// Source of captured audio bytes, e.g. a microphone or a prerecorded
/// file. Device enumeration and capture internals live behind this
/// seam and are not part of this crate.
#[async_trait]
pub trait AudioSource: Send + Sync {
    /// Record one utterance as WAV bytes, bounded by `timeout`.
    async fn capture_utterance(&self, timeout: Duration) -> Result<Vec<u8>, VoiceError>;
}

/// Whisper transcription configuration.
#[derive(Clone)]
pub struct WhisperConfig {
    pub api_key: String,
    pub model: String,
    pub capture_timeout: Duration,
}

impl std::fmt::Debug for WhisperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("capture_timeout", &self.capture_timeout)
            .finish()
    }
}

impl WhisperConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "whisper-1".to_string(),
            capture_timeout: Duration::from_secs(15),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_capture_timeout(mut self, timeout: Duration) -> Self {
        self.capture_timeout = timeout;
        self
    }
}

/// Whisper-backed `VoiceInput` over a pluggable audio source.
pub struct WhisperVoice {
    config: WhisperConfig,
    source: Box<dyn AudioSource>,
    http: reqwest::Client,
}

impl WhisperVoice {
    pub fn new(config: WhisperConfig, source: Box<dyn AudioSource>) -> Self {
        Self {
            config,
            source,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl VoiceInput for WhisperVoice {
    async fn transcribe_once(&self, language: Language) -> Result<String, VoiceError> {
        let audio = self
            .source
            .capture_utterance(self.config.capture_timeout)
            .await?;

        debug!(
            model = %self.config.model,
            size = audio.len(),
            lang = language.speech_tag(),
            "transcription request"
        );

        let file_part = reqwest::multipart::Part::bytes(audio)
            .file_name("utterance.wav")
            .mime_str("audio/wav")
            .map_err(|e| VoiceError::Other(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone())
            .text("language", language.speech_tag());

        let response = self
            .http
            .post(TRANSCRIPTION_API_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| VoiceError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::ServiceUnavailable(format!(
                "HTTP {status}: {body}"
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| VoiceError::Other(e.to_string()))?;

        let text = json["text"].as_str().unwrap_or("").trim().to_string();
        if text.is_empty() {
            return Err(VoiceError::Unintelligible);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeadMicrophone;

    #[async_trait]
    impl AudioSource for DeadMicrophone {
        async fn capture_utterance(&self, _timeout: Duration) -> Result<Vec<u8>, VoiceError> {
            Err(VoiceError::NoDevice)
        }
    }

    #[tokio::test]
    async fn capture_failure_propagates_before_any_request() {
        let voice = WhisperVoice::new(WhisperConfig::new("key"), Box::new(DeadMicrophone));
        let err = voice.transcribe_once(Language::Hindi).await.unwrap_err();
        assert!(matches!(err, VoiceError::NoDevice));
    }

    #[test]
    fn config_debug_redacts_key() {
        let config = WhisperConfig::new("sk-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn error_messages_are_user_readable() {
        assert_eq!(
            VoiceError::NoDevice.to_string(),
            "no audio input device available"
        );
        assert_eq!(VoiceError::Timeout.to_string(), "listening timed out");
        assert_eq!(
            VoiceError::Unintelligible.to_string(),
            "could not understand the audio"
        );
    }
}
