//! Prompt command implementation.

use crate::agent::Agent;
use crate::cli::Cli;
use anyhow::Result;

/// Run the agent on the prompt from the command line and print the response.
///
/// Failures are returned to `main`, which reports them once.
pub fn run_prompt(cli: &Cli) -> Result<()> {
    let agent = Agent::new(cli.agent_options())?;
    let context = cli.context_map();

    let response = agent.run(&cli.prompt, context.as_ref())?;
    println!("{}", response);

    Ok(())
}
