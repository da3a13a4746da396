//! Process-wide log sink setup.
//!
//! The first successful call to [`init`] (or [`init_with_console`]) installs
//! a global `tracing` subscriber writing to a size-rotated log file. Later
//! calls still validate `LOG_LEVEL` but never register a second sink. A failed
//! attempt leaves nothing installed, so the next call tries again.

mod rolling;

pub use rolling::RollingFileWriter;

use crate::config::{EnvSource, LoggingSettings};
use crate::error::{AgentError, Result};
use std::sync::Mutex;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable selecting the minimum severity written to the log file.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

static SINK_INSTALLED: Mutex<bool> = Mutex::new(false);

/// Install the file sink if no sink has been installed yet.
pub fn init(settings: &LoggingSettings, env: &impl EnvSource) -> Result<()> {
    init_with_console(settings, env, None)
}

/// Install the file sink plus an optional stderr layer filtered by `console`.
pub fn init_with_console(
    settings: &LoggingSettings,
    env: &impl EnvSource,
    console: Option<EnvFilter>,
) -> Result<()> {
    let level = level_from_env(env)?;

    let mut installed = SINK_INSTALLED
        .lock()
        .map_err(|_| AgentError::Logging("log sink lock poisoned".to_string()))?;
    if *installed {
        return Ok(());
    }

    install(settings, level, console)?;
    *installed = true;
    Ok(())
}

fn install(settings: &LoggingSettings, level: LevelFilter, console: Option<EnvFilter>) -> Result<()> {
    let writer = open_sink(settings)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(level);

    let console_layer = console.map(|filter| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
    });

    if tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        debug!("Global subscriber already installed, log file sink not attached");
    }

    Ok(())
}

fn open_sink(settings: &LoggingSettings) -> Result<RollingFileWriter> {
    let max_bytes = settings.rotation_bytes()?;
    Ok(RollingFileWriter::new(settings.path(), max_bytes)?)
}

/// Read the file sink level from `LOG_LEVEL`, defaulting to INFO.
pub fn level_from_env(env: &impl EnvSource) -> Result<LevelFilter> {
    match env.var(LOG_LEVEL_VAR) {
        Some(raw) => parse_level(&raw),
        None => Ok(LevelFilter::INFO),
    }
}

/// Parse a severity name. Accepts the usual tracing names plus
/// `SUCCESS`, `WARNING` and `CRITICAL`.
pub fn parse_level(raw: &str) -> Result<LevelFilter> {
    match raw.trim().to_uppercase().as_str() {
        "TRACE" => Ok(LevelFilter::TRACE),
        "DEBUG" => Ok(LevelFilter::DEBUG),
        "INFO" | "SUCCESS" => Ok(LevelFilter::INFO),
        "WARN" | "WARNING" => Ok(LevelFilter::WARN),
        "ERROR" | "CRITICAL" => Ok(LevelFilter::ERROR),
        "OFF" => Ok(LevelFilter::OFF),
        _ => Err(AgentError::Logging(format!(
            "Unknown {} value: {}",
            LOG_LEVEL_VAR, raw
        ))),
    }
}
