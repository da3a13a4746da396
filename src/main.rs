//! G1 Agent CLI entry point.

use anyhow::Result;
use clap::Parser;
use g1_agent::cli::{commands, Cli};
use g1_agent::config::{ProcessEnv, Settings};
use g1_agent::logging;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Console logging level
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&Settings::expand_path(path)))?,
        None => Settings::load()?,
    };

    // Attach the file sink before any agent is built so the configured path wins
    let console = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("g1_agent={}", log_level)),
    );
    logging::init_with_console(&settings.logging, &ProcessEnv, Some(console))?;

    if cli.show_config {
        commands::run_show_config(&cli, &settings)?;
    } else {
        commands::run_prompt(&cli)?;
    }

    Ok(())
}
