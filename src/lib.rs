//! G1 Agent - configurable LLM agent scaffold
//!
//! An agent that resolves its model settings from explicit values, the
//! environment, or built-in defaults, and answers prompts through a
//! pluggable response generator.
//!
//! # Architecture
//!
//! - `config` - Agent configuration resolution and the settings file
//! - `logging` - One-time log sink setup with a size-rotated log file
//! - `agent` - The agent and its response generator seam
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use g1_agent::agent::Agent;
//! use g1_agent::config::AgentOptions;
//!
//! fn main() -> anyhow::Result<()> {
//!     let agent = Agent::new(AgentOptions::new().model("claude-3"))?;
//!     let response = agent.run("What is the meaning of life?", None)?;
//!     println!("{}", response);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use agent::Agent;
pub use error::{AgentError, Result};
