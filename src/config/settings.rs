//! Configuration settings for the G1 agent.

use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
}

/// Log sink settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file path.
    pub path: String,
    /// Size at which the log file is rolled over (e.g. "10 MB", "512 KiB").
    pub rotation: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            path: "logs/agent.log".to_string(),
            rotation: "10 MB".to_string(),
        }
    }
}

impl LoggingSettings {
    /// Get the expanded log file path.
    pub fn path(&self) -> PathBuf {
        Settings::expand_path(&self.path)
    }

    /// Rotation threshold in bytes.
    pub fn rotation_bytes(&self) -> Result<u64> {
        parse_size(&self.rotation)
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("g1-agent")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }
}

/// Parse a human-readable size such as "10 MB", "1.5GB", "512 KiB" or "4096".
///
/// Decimal units (KB, MB, GB) are powers of 1000; binary units (KiB, MiB, GiB)
/// are powers of 1024.
pub fn parse_size(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| AgentError::Config(format!("Invalid size: {}", input)))?;

    let multiplier: f64 = match unit.trim().to_lowercase().as_str() {
        "" | "b" => 1.0,
        "kb" | "k" => 1e3,
        "mb" | "m" => 1e6,
        "gb" | "g" => 1e9,
        "kib" => 1024.0,
        "mib" => 1024.0 * 1024.0,
        "gib" => 1024.0 * 1024.0 * 1024.0,
        other => {
            return Err(AgentError::Config(format!(
                "Unknown size unit '{}' in: {}",
                other, input
            )))
        }
    };

    let bytes = (value * multiplier).round();
    if bytes < 1.0 {
        return Err(AgentError::Config(format!(
            "Size must be at least one byte: {}",
            input
        )));
    }

    Ok(bytes as u64)
}
