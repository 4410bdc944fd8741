//! OpenRouter chat-completion client.
//!
//! Implements the `CompletionClient` trait against the OpenRouter
//! chat completions API (https://openrouter.ai/api/v1/chat/completions).
//!
//! One request per call with a fixed 60-second timeout. Failures are
//! returned as typed errors; retry policy is left to the caller, and
//! there is none by default.

mod api;
mod client;
mod config;

pub use client::OpenRouterClient;
pub use config::{resolve_api_key, OpenRouterConfig};
