//! Structured logging configuration.

use std::fmt;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log level for the default filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Logging configuration.
///
/// `RUST_LOG`, when set, takes precedence over `level` and `directives`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Default level for every target.
    #[serde(default)]
    pub level: LogLevel,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
    /// Extra `EnvFilter` directives (e.g. `canteen_commerce::cart=trace`).
    #[serde(default)]
    pub directives: Vec<String>,
}

impl LogConfig {
    /// Set the default level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Add a per-target directive.
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// The filter string built from this config.
    pub fn filter_string(&self) -> String {
        let mut parts = vec![self.level.as_directive().to_string()];
        parts.extend(
            self.directives
                .iter()
                .map(|d| d.trim())
                .filter(|d| !d.is_empty())
                .map(String::from),
        );
        parts.join(",")
    }

    /// Build the `EnvFilter` for this config, ignoring the environment.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let filter = self.filter_string();
        EnvFilter::try_new(&filter).with_context(|| format!("Invalid log filter: {}", filter))
    }
}

/// Install the global `tracing` subscriber.
///
/// Fails if the configured directives do not parse or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Human => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
    tracing::debug!(format = ?config.format, "Log subscriber installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_string_includes_directives() {
        let config = LogConfig::default()
            .with_level(LogLevel::Warn)
            .with_directive("canteen_commerce=debug")
            .with_directive("  ");
        assert_eq!(config.filter_string(), "warn,canteen_commerce=debug");
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        let config = LogConfig::default().with_directive("canteen_commerce=loudest");
        assert!(config.env_filter().is_err());
    }

    #[test]
    fn test_config_deserializes_lowercase() {
        let config: LogConfig =
            serde_json::from_str(r#"{"level":"debug","format":"human"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Human);
        assert!(config.directives.is_empty());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Error);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }
}
