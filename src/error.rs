//! Error types for the G1 agent.

use thiserror::Error;

/// Library-level error type for agent operations.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    ConfigParse {
        var: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Response generation failed: {0}")]
    Generation(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;
