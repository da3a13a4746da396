//! CLI module for the G1 agent.

pub mod commands;

use crate::agent::Context;
use crate::config::AgentOptions;
use clap::Parser;

/// Prompt used when none is given on the command line.
pub const DEFAULT_PROMPT: &str = "What is the meaning of life?";

/// G1 Agent - configurable LLM agent
///
/// Sends a prompt to the agent and prints the response. Model settings fall
/// back to AGENT_MODEL, AGENT_TEMPERATURE and AGENT_MAX_TOKENS when not given.
#[derive(Parser, Debug)]
#[command(name = "g1-agent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Prompt to send to the agent
    #[arg(default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// LLM model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Maximum tokens in the response
    #[arg(long, allow_negative_numbers = true)]
    pub max_tokens: Option<i64>,

    /// Context entry as KEY=VALUE; VALUE is read as JSON when it parses, else as text
    #[arg(long = "context", value_name = "KEY=VALUE", value_parser = parse_context_entry)]
    pub context: Vec<(String, serde_json::Value)>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Increase console verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Agent overrides taken from the command line.
    pub fn agent_options(&self) -> AgentOptions {
        AgentOptions {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Context entries collected into a map, or `None` when none were given.
    pub fn context_map(&self) -> Option<Context> {
        if self.context.is_empty() {
            None
        } else {
            Some(self.context.iter().cloned().collect())
        }
    }
}

fn parse_context_entry(raw: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    if key.is_empty() {
        return Err(format!("empty context key in '{}'", raw));
    }

    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
