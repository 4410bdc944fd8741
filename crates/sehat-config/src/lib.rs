//! Sehat configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the
//! box, and a commented default file is created on first run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sehat_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("language: {}", config.chat.language);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::SehatConfig;
pub use toml_loader::{create_default_config, default_config_path, load_from_path};

use sehat_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<SehatConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
