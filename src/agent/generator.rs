//! Response generation backends.

use crate::config::AgentConfig;
use crate::error::Result;
use std::collections::HashMap;

/// Free-form context passed alongside a prompt.
pub type Context = HashMap<String, serde_json::Value>;

/// Everything a backend needs to produce a response.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub prompt: &'a str,
    pub context: Option<&'a Context>,
    pub config: &'a AgentConfig,
}

impl GenerationRequest<'_> {
    pub fn model(&self) -> &str {
        self.config.model()
    }

    pub fn temperature(&self) -> f64 {
        self.config.temperature()
    }

    pub fn max_tokens(&self) -> i64 {
        self.config.max_tokens()
    }
}

/// Trait for response generation.
///
/// Errors returned here reach the caller of [`Agent::run`](super::Agent::run)
/// unchanged.
pub trait ResponseGenerator: Send + Sync {
    /// Produce a response for the request.
    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String>;
}

/// Placeholder backend that echoes the prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubGenerator;

impl ResponseGenerator for StubGenerator {
    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String> {
        Ok(format!("Response to: {}", request.prompt))
    }
}
