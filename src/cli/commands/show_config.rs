//! Show-config command implementation.

use crate::agent::Agent;
use crate::cli::Cli;
use crate::config::{AgentConfig, LoggingSettings, Settings};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ResolvedConfig<'a> {
    config_file: String,
    agent: &'a AgentConfig,
    logging: &'a LoggingSettings,
}

/// Print the resolved agent configuration and log sink settings as TOML.
pub fn run_show_config(cli: &Cli, settings: &Settings) -> Result<()> {
    let agent = Agent::new(cli.agent_options())?;

    let config_path = match &cli.config {
        Some(path) => Settings::expand_path(path),
        None => Settings::default_config_path(),
    };

    print!("{}", render_config(agent.config(), settings, &config_path)?);
    Ok(())
}

fn render_config(config: &AgentConfig, settings: &Settings, config_path: &Path) -> Result<String> {
    let resolved = ResolvedConfig {
        config_file: config_path.display().to_string(),
        agent: config,
        logging: &settings.logging,
    };

    toml::to_string_pretty(&resolved)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))
}
