//! Error types for yaml-colors

use thiserror::Error;

/// Result type alias for yaml-colors operations
pub type Result<T> = std::result::Result<T, ColorsError>;

/// Errors raised outside the classifier (config, terminal output)
#[derive(Error, Debug)]
pub enum ColorsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Cannot serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("No home directory to hold the config file")]
    NoConfigPath,

    #[error("{0}")]
    Message(String),
}
