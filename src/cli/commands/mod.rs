//! CLI command implementations.

mod run;
mod show_config;

pub use run::run_prompt;
pub use show_config::run_show_config;
