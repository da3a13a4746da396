//! The agent entry point.

use super::generator::{Context, GenerationRequest, ResponseGenerator, StubGenerator};
use crate::config::{AgentConfig, AgentOptions, EnvSource, LoggingSettings, ProcessEnv};
use crate::error::Result;
use crate::logging;
use tracing::{error, info};

/// Number of prompt characters echoed into the log.
const PROMPT_PREVIEW_CHARS: usize = 100;

/// Agent wrapping a response generator with resolved configuration.
pub struct Agent {
    config: AgentConfig,
    generator: Box<dyn ResponseGenerator>,
}

impl Agent {
    /// Create an agent, resolving unset options from the process environment.
    pub fn new(options: AgentOptions) -> Result<Self> {
        Self::with_env(options, &ProcessEnv)
    }

    /// Create an agent, resolving unset options from the given environment.
    pub fn with_env(options: AgentOptions, env: &impl EnvSource) -> Result<Self> {
        let config = AgentConfig::resolve(&options, env)?;

        logging::init(&LoggingSettings::default(), env)?;
        info!("G1 Agent initialized with model={}", config.model());

        Ok(Self {
            config,
            generator: Box::new(StubGenerator),
        })
    }

    /// Replace the response backend.
    pub fn with_generator(mut self, generator: impl ResponseGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        self.config.model()
    }

    pub fn temperature(&self) -> f64 {
        self.config.temperature()
    }

    pub fn max_tokens(&self) -> i64 {
        self.config.max_tokens()
    }

    /// Run the agent on a prompt.
    ///
    /// Backend failures are logged and returned as-is; there is no retry.
    pub fn run(&self, prompt: &str, context: Option<&Context>) -> Result<String> {
        info!("Running agent with prompt: {}...", prompt_preview(prompt));

        let request = GenerationRequest {
            prompt,
            context,
            config: &self.config,
        };

        match self.generator.generate(&request) {
            Ok(response) => {
                info!("Agent response generated successfully");
                Ok(response)
            }
            Err(e) => {
                error!("Error during agent execution: {}", e);
                Err(e)
            }
        }
    }

    /// Register a tool with the agent.
    ///
    /// Tools are not stored or invoked yet; this only records the name in the log.
    pub fn add_tool<F>(&self, name: &str, _function: F) {
        // TODO: keep a name -> tool map once a tool-calling protocol is defined.
        info!("Tool '{}' registered", name);
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent").field("config", &self.config).finish()
    }
}

fn prompt_preview(prompt: &str) -> &str {
    match prompt.char_indices().nth(PROMPT_PREVIEW_CHARS) {
        Some((idx, _)) => &prompt[..idx],
        None => prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_TOKENS_VAR, MODEL_VAR, TEMPERATURE_VAR};
    use crate::error::AgentError;
    use crate::logging::testing::{capture_logs, init_temp_sink};
    use crate::logging::LOG_LEVEL_VAR;
    use std::collections::HashMap;

    fn empty_env() -> HashMap<String, String> {
        init_temp_sink();
        HashMap::new()
    }

    struct FailingGenerator;

    impl ResponseGenerator for FailingGenerator {
        fn generate(&self, _request: &GenerationRequest<'_>) -> Result<String> {
            Err(AgentError::Generation("provider unavailable".to_string()))
        }
    }

    struct ConfigEcho;

    impl ResponseGenerator for ConfigEcho {
        fn generate(&self, request: &GenerationRequest<'_>) -> Result<String> {
            let keys = request.context.map(|c| c.len()).unwrap_or(0);
            Ok(format!(
                "{}|{}|{}|{}",
                request.model(),
                request.temperature(),
                request.max_tokens(),
                keys
            ))
        }
    }

    #[test]
    fn test_default_agent() {
        let agent = Agent::with_env(AgentOptions::new(), &empty_env()).unwrap();
        assert_eq!(agent.model(), "gpt-4");
        assert_eq!(agent.temperature(), 0.7);
        assert_eq!(agent.max_tokens(), 2000);
    }

    #[test]
    fn test_custom_config() {
        let options = AgentOptions::new()
            .model("gpt-4")
            .temperature(0.5)
            .max_tokens(1000);
        let agent = Agent::with_env(options, &empty_env()).unwrap();
        assert_eq!(agent.model(), "gpt-4");
        assert_eq!(agent.temperature(), 0.5);
        assert_eq!(agent.max_tokens(), 1000);
    }

    #[test]
    fn test_zero_temperature_falls_back() {
        let agent =
            Agent::with_env(AgentOptions::new().temperature(0.0), &empty_env()).unwrap();
        assert_eq!(agent.temperature(), 0.7);
    }

    #[test]
    fn test_malformed_env_fails_construction() {
        let mut env = empty_env();
        env.insert(MAX_TOKENS_VAR.to_string(), "many".to_string());

        let err = Agent::with_env(AgentOptions::new(), &env).unwrap_err();
        assert!(matches!(err, AgentError::ConfigParse { .. }));
    }

    #[test]
    fn test_run_returns_stub_response() {
        let agent = Agent::with_env(AgentOptions::new(), &empty_env()).unwrap();
        assert_eq!(agent.run("hello", None).unwrap(), "Response to: hello");
        assert_eq!(agent.run("", None).unwrap(), "Response to: ");
    }

    #[test]
    fn test_run_ignores_context() {
        let agent = Agent::with_env(AgentOptions::new(), &empty_env()).unwrap();
        let mut context = Context::new();
        context.insert("session".to_string(), serde_json::json!({"id": 7}));

        assert_eq!(
            agent.run("hello", Some(&context)).unwrap(),
            "Response to: hello"
        );
    }

    #[test]
    fn test_add_tool_does_not_change_run() {
        let agent = Agent::with_env(AgentOptions::new(), &empty_env()).unwrap();
        agent.add_tool("search", |query: &str| query.len());
        agent.add_tool("noop", ());

        assert_eq!(agent.run("hello", None).unwrap(), "Response to: hello");
    }

    #[test]
    fn test_generation_error_is_passed_through() {
        let agent = Agent::with_env(AgentOptions::new(), &empty_env())
            .unwrap()
            .with_generator(FailingGenerator);

        match agent.run("hello", None) {
            Err(AgentError::Generation(msg)) => assert_eq!(msg, "provider unavailable"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_generator_sees_resolved_config() {
        let mut env = empty_env();
        env.insert(MODEL_VAR.to_string(), "foo".to_string());
        env.insert(TEMPERATURE_VAR.to_string(), "0.9".to_string());

        let agent = Agent::with_env(AgentOptions::new().max_tokens(100), &env)
            .unwrap()
            .with_generator(ConfigEcho);
        let mut context = Context::new();
        context.insert("a".to_string(), serde_json::json!(1));

        assert_eq!(agent.run("x", Some(&context)).unwrap(), "foo|0.9|100|1");
    }

    #[test]
    fn test_repeated_construction_is_safe() {
        for _ in 0..3 {
            Agent::with_env(AgentOptions::new(), &empty_env()).unwrap();
        }
    }

    #[test]
    fn test_log_level_comes_from_given_env() {
        let mut env = empty_env();
        env.insert(LOG_LEVEL_VAR.to_string(), "INFO".to_string());
        Agent::with_env(AgentOptions::new(), &env).unwrap();

        env.insert(LOG_LEVEL_VAR.to_string(), "loud".to_string());
        let err = Agent::with_env(AgentOptions::new(), &env).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Logging setup failed: Unknown LOG_LEVEL value: loud"
        );
    }

    #[test]
    fn test_records_are_logged_with_severity() {
        let env = empty_env();
        let (_, logs) = capture_logs(|| {
            let agent = Agent::with_env(AgentOptions::new().model("claude-3"), &env).unwrap();
            agent.add_tool("search", |query: &str| query.len());
            agent.run("hello", None).unwrap();

            let failing = Agent::with_env(AgentOptions::new(), &env)
                .unwrap()
                .with_generator(FailingGenerator);
            failing.run("boom", None).unwrap_err();
        });

        assert!(logs
            .line("G1 Agent initialized with model=claude-3")
            .contains("INFO"));
        assert!(logs.line("Tool 'search' registered").contains("INFO"));
        assert!(logs
            .line("Running agent with prompt: hello...")
            .contains("INFO"));
        assert!(logs
            .line("Agent response generated successfully")
            .contains("INFO"));

        let error_line = logs.line("Error during agent execution:");
        assert!(error_line.contains("ERROR"));
        assert!(error_line.contains("Response generation failed: provider unavailable"));
    }

    #[test]
    fn test_long_prompt_is_truncated_in_log() {
        let env = empty_env();
        let prompt = format!("{}{}", "a".repeat(100), "b".repeat(50));

        let (response, logs) = capture_logs(|| {
            let agent = Agent::with_env(AgentOptions::new(), &env).unwrap();
            agent.run(&prompt, None).unwrap()
        });

        assert_eq!(response, format!("Response to: {}", prompt));
        let line = logs.line("Running agent with prompt:");
        assert!(line.contains(&format!("Running agent with prompt: {}...", "a".repeat(100))));
        assert!(!line.contains(&format!("{}b", "a".repeat(100))));
    }

    #[test]
    fn test_prompt_preview_counts_characters() {
        let short = "short prompt";
        assert_eq!(prompt_preview(short), short);

        let long = "é".repeat(150);
        assert_eq!(prompt_preview(&long).chars().count(), 100);

        let exact = "a".repeat(100);
        assert_eq!(prompt_preview(&exact), exact);
    }

    #[test]
    fn test_agent_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Agent>();
    }
}
