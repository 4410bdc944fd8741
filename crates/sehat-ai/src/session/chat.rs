//! Async submission flow for Session.

use tracing::{debug, warn};

use crate::prompt::build_system_prompt;
use crate::{CompletionClient, CompletionError, Message, Role};

use super::manager::Session;
use super::types::{BusyGuard, SessionError};

impl Session {
    /// Submit one user turn and return the assistant's reply text.
    ///
    /// Input that is empty after trimming is rejected as a no-op and
    /// returns `Ok(None)` with zero state change. While a request is
    /// outstanding, further submissions return `Err(Busy)`.
    ///
    /// Completion failures are absorbed into the conversation as a
    /// visible assistant message rather than propagated, so
    /// `Ok(Some(_))` covers both the reply and the failure text.
    pub async fn submit_user_turn(
        &mut self,
        client: &dyn CompletionClient,
        text: &str,
    ) -> Result<Option<String>, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let _guard = BusyGuard::acquire(&self.busy)?;

        self.messages.push(Message {
            role: Role::User,
            content: text.to_string(),
        });

        // The system message must reflect the settings in effect now,
        // not the ones the conversation started with.
        self.messages[0] = build_system_prompt(self.settings.language);

        debug!(
            window = self.request_window().len(),
            total = self.messages.len(),
            "submitting completion request"
        );

        let reply = match client
            .complete(
                self.request_window(),
                self.settings.temperature,
                self.max_tokens,
            )
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("completion failed: {e}");
                user_facing_error(&e)
            }
        };

        self.messages.push(Message {
            role: Role::Assistant,
            content: reply.clone(),
        });

        Ok(Some(reply))
    }
}

/// Render a completion failure as the assistant message shown in place
/// of a reply.
fn user_facing_error(err: &CompletionError) -> String {
    match err {
        CompletionError::MissingCredential => {
            "No API key found. Set it in the config file or OPENROUTER_API_KEY.".to_string()
        }
        CompletionError::Network(msg) => format!("Network error: {msg}"),
        CompletionError::Upstream { status, body } => {
            format!("Completion service error {status}: {body}")
        }
        CompletionError::Parse(msg) => {
            format!("Unexpected response from completion service: {msg}")
        }
    }
}
