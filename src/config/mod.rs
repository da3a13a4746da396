//! Configuration module for the G1 agent.
//!
//! Handles agent configuration resolution (explicit value, environment,
//! default) and the settings file for the log sink.

mod agent;
mod env;
mod settings;

pub use agent::{
    AgentConfig, AgentOptions, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    MAX_TOKENS_VAR, MODEL_VAR, TEMPERATURE_VAR,
};
pub use env::{EnvSource, ProcessEnv};
pub use settings::{parse_size, LoggingSettings, Settings};
