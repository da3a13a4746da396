//! Agent configuration resolution.
//!
//! Each field resolves in order: explicit value, then environment variable,
//! then built-in default. An explicit value that is "empty" (an empty model
//! name, a temperature of zero, zero max tokens) counts as not supplied and
//! falls through to the environment or default.

use super::env::EnvSource;
use crate::error::{AgentError, Result};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

/// Environment variable overriding the model identifier.
pub const MODEL_VAR: &str = "AGENT_MODEL";
/// Environment variable overriding the sampling temperature.
pub const TEMPERATURE_VAR: &str = "AGENT_TEMPERATURE";
/// Environment variable overriding the response token cap.
pub const MAX_TOKENS_VAR: &str = "AGENT_MAX_TOKENS";

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: i64 = 2000;

/// Caller-supplied overrides for agent construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentOptions {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<i64>,
}

impl AgentOptions {
    /// Options with nothing overridden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the sampling temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Override the response token cap.
    pub fn max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Fully resolved agent configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentConfig {
    model: String,
    temperature: f64,
    max_tokens: i64,
}

impl AgentConfig {
    /// Resolve configuration from explicit options and an environment source.
    ///
    /// Environment values are only parsed when the explicit value is absent
    /// or empty, so a malformed variable is ignored if the caller overrides it.
    pub fn resolve(options: &AgentOptions, env: &impl EnvSource) -> Result<Self> {
        let model = match options.model.as_ref().filter(|m| !m.is_empty()) {
            Some(model) => model.clone(),
            None => env
                .var(MODEL_VAR)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        };

        let temperature = match options.temperature.filter(|t| *t != 0.0) {
            Some(temperature) => temperature,
            None => env_or_default(env, TEMPERATURE_VAR, DEFAULT_TEMPERATURE)?,
        };

        let max_tokens = match options.max_tokens.filter(|n| *n != 0) {
            Some(max_tokens) => max_tokens,
            None => env_or_default(env, MAX_TOKENS_VAR, DEFAULT_MAX_TOKENS)?,
        };

        Ok(Self {
            model,
            temperature,
            max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> i64 {
        self.max_tokens
    }
}

fn env_or_default<T>(env: &impl EnvSource, var: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env.var(var) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AgentError::ConfigParse {
                var: var.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
