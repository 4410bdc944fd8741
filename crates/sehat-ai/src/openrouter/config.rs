//! OpenRouter client configuration and credential resolution.

use std::fmt;

/// OpenRouter API client configuration.
#[derive(Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub model: String,
    pub referer: String,
    pub title: String,
}

impl fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .finish()
    }
}

impl OpenRouterConfig {
    /// Create a config with the default model and attribution headers.
    /// An empty `api_key` is allowed; the client reports it as
    /// `MissingCredential` at call time instead of failing here.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "openai/gpt-3.5-turbo".to_string(),
            referer: "https://github.com/sehat-ai/sehat".to_string(),
            title: "Sehat".to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Resolve the API key without failing.
///
/// Resolution order:
/// 1. explicit session override (CLI flag or in-session entry)
/// 2. `api.key` from the config file
/// 3. `OPENROUTER_API_KEY` environment variable
///
/// Returns `None` when no tier yields a non-empty key. A missing key
/// is a degraded state reported at call time, never a startup failure.
pub fn resolve_api_key(override_key: Option<&str>, config_key: Option<&str>) -> Option<String> {
    for candidate in [override_key, config_key] {
        if let Some(key) = candidate {
            let key = key.trim();
            if !key.is_empty() {
                return Some(key.to_string());
            }
        }
    }
    std::env::var("OPENROUTER_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}
