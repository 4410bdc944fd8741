pub mod errors;

pub use errors::{ConfigError, SehatError};

pub type Result<T> = std::result::Result<T, SehatError>;
