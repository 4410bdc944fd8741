//! OpenRouter client struct, request building, and response parsing.

use crate::{CompletionError, Message};

use super::config::OpenRouterConfig;

pub(crate) const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// OpenRouter API client.
pub struct OpenRouterClient {
    pub(crate) config: OpenRouterConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Build the JSON request body for the chat completions API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        temperature: f64,
        max_tokens: u32,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": temperature,
            "max_tokens": max_tokens,
        })
    }

    /// Extract and trim the first generated choice's text.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, CompletionError> {
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                CompletionError::Parse("no message content in first choice".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn client() -> OpenRouterClient {
        OpenRouterClient::new(OpenRouterConfig::new("test-key"))
    }

    #[test]
    fn request_body_carries_generation_parameters() {
        let messages = vec![
            Message {
                role: Role::System,
                content: "policy".into(),
            },
            Message {
                role: Role::User,
                content: "What helps for fever?".into(),
            },
        ];
        let body = client().build_request_body(&messages, 0.3, 500);

        assert_eq!(body["model"], "openai/gpt-3.5-turbo");
        assert_eq!(body["temperature"], 0.3);
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let messages = vec![Message {
            role: Role::Assistant,
            content: "hello".into(),
        }];
        let body = client().build_request_body(&messages, 0.0, 1);
        assert_eq!(body["messages"][0]["role"], "assistant");
    }

    #[test]
    fn parse_response_trims_first_choice() {
        let json = serde_json::json!({
            "choices": [{"message": {"content": "  Rest and fluids.  "}}]
        });
        let text = client().parse_response(json).unwrap();
        assert_eq!(text, "Rest and fluids.");
    }

    #[test]
    fn parse_response_without_content_is_an_error() {
        let json = serde_json::json!({"choices": []});
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, CompletionError::Parse(_)));
    }
}
