//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use sehat_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_sehat_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chat]
language = "Hindi"
temperature = 0.7

[api]
title = "Sehat Dev"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.language, "Hindi");
    assert_eq!(config.chat.temperature, 0.7);
    assert_eq!(config.api.title, "Sehat Dev");
    // Defaults preserved
    assert_eq!(config.chat.model, "openai/gpt-3.5-turbo");
    assert_eq!(config.chat.history_window, 10);
    assert!(config.api.key.is_none());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_out_of_range_values_warns_but_returns_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chat]
temperature = 4.0
"#,
    )
    .unwrap();

    // load_from_path warns on validation failure but returns the parsed config
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.temperature, 4.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sehat").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.chat.language, "English");
    assert_eq!(config.chat.max_tokens, 500);
    assert!(!config.voice.enabled);
}
