//! CompletionClient trait implementation for OpenRouterClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{CompletionClient, CompletionError, Message};

use super::client::{OpenRouterClient, OPENROUTER_API_URL};

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(
        &self,
        messages: &[Message],
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        // Checked before any network traffic so a missing key degrades
        // to a visible reply instead of a transport error.
        if self.config.api_key.trim().is_empty() {
            return Err(CompletionError::MissingCredential);
        }

        let body = self.build_request_body(messages, temperature, max_tokens);

        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "OpenRouter completion request"
        );

        let response = self
            .http
            .post(OPENROUTER_API_URL)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key),
            )
            .header("HTTP-Referer", self.config.referer.as_str())
            .header("X-Title", self.config.title.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
