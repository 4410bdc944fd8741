mod audio;
mod cli;
mod repl;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use sehat_ai::{resolve_api_key, Language, OpenRouterClient, OpenRouterConfig, Session, SessionSettings};
use sehat_config::SehatConfig;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try common locations for .env relative to the workspace
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root — two levels up from crates/sehat-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    // Parse CLI arguments
    let args = cli::parse();

    // Load config (before logging init, so the level can come from it)
    let config = match args.config {
        Some(ref path) => sehat_config::load_from_path(Path::new(path)),
        None => sehat_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Config load failed, using defaults: {e}");
        SehatConfig::default()
    });

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("sehat={}", config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "sehat=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Sehat v{} starting", env!("CARGO_PKG_VERSION"));

    // Session settings: config values with CLI overrides
    let mut settings = SessionSettings {
        language: Language::from_name(&config.chat.language),
        temperature: config.chat.temperature,
    };
    if let Some(ref lang) = args.language {
        settings.language = Language::from_name(lang);
    }
    if let Some(temp) = args.temperature {
        settings.temperature = temp.clamp(0.0, 1.0);
    }

    // Credential resolution: CLI override -> config file -> env var.
    // Absence is a degraded state, not a startup failure.
    let api_key = resolve_api_key(args.api_key.as_deref(), config.api.key.as_deref());
    if api_key.is_none() {
        tracing::warn!("no API key configured; replies will report the missing credential");
    }

    let client = OpenRouterClient::new(
        OpenRouterConfig::new(api_key.unwrap_or_default())
            .with_model(config.chat.model.clone())
            .with_referer(config.api.referer.clone())
            .with_title(config.api.title.clone()),
    );

    let session = Session::new(settings)
        .with_history_window(config.chat.history_window)
        .with_max_tokens(config.chat.max_tokens);

    if let Err(e) = repl::run(session, client, &config).await {
        tracing::error!("chat loop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
