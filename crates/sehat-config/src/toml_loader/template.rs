//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Sehat Configuration
# Only override what you want to change -- missing fields use defaults.

[chat]
# language = "English"   # English, Hindi, Marathi, Gujarati, Rajasthani
# temperature = 0.3      # 0.0-1.0
# model = "openai/gpt-3.5-turbo"
# max_tokens = 500
# history_window = 10    # trailing messages sent per request

[api]
# key = ""               # OpenRouter API key; OPENROUTER_API_KEY env var also works
# referer = "https://github.com/sehat-ai/sehat"
# title = "Sehat"

[voice]
# enabled = false
# model = "whisper-1"
# capture_timeout_secs = 15   # 1-300

[logging]
# level = "info"         # debug, info, warn, error
"##
    .to_string()
}
