//! AI core for Sehat.
//!
//! Provides the OpenRouter completion client, the health-guidance
//! prompt builder, conversation session management, and voice input:
//! - One completion request per user turn (no retries, no streaming)
//! - Session state with a hard trailing-window truncation policy
//! - In-memory archive of cleared conversations
//! - Whisper-backed speech-to-text behind a narrow trait

pub mod openrouter;
pub mod prompt;
pub mod session;
pub mod voice;

use async_trait::async_trait;

pub use openrouter::{resolve_api_key, OpenRouterClient, OpenRouterConfig};
pub use prompt::{build_system_prompt, greeting, Language};
pub use session::{Session, SessionError, SessionSettings};
pub use voice::{AudioSource, VoiceError, VoiceInput, WhisperConfig, WhisperVoice};

/// A client for a hosted chat-completion service.
///
/// Callers pass a non-empty message sequence whose first element is
/// the builder-produced system message. Every outcome is returned as
/// data; implementations never panic past this boundary.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, CompletionError>;
}

/// One message in a conversation, tagged with a role.
/// Immutable once appended to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// No credential resolved; detected before any network call.
    #[error("no API key configured")]
    MissingCredential,
    /// Transport failure, including the request timeout.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status from the completion service. The raw body is
    /// preserved so callers can surface it verbatim.
    #[error("completion service error {status}: {body}")]
    Upstream { status: u16, body: String },
    /// Success status but no usable generated text in the response.
    #[error("parse error: {0}")]
    Parse(String),
}
