//! Construction-time configuration
//!
//! [`Config`] names the backend, the deployment environment and the initial
//! level. The initial level is resolved once, at construction:
//!
//! 1. `AZA_LOG_LEVEL` from the environment, if set to a valid level
//! 2. otherwise the configured level, if valid
//! 3. otherwise `info`
//!
//! The environment is read through an injected lookup so that resolution
//! stays deterministic under test.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable overriding the configured initial level
pub const LOG_LEVEL_ENV_VAR: &str = "AZA_LOG_LEVEL";

/// Environment lookup reading the process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Deployment mode. Affects output formatting of the structured backends only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Human-readable, colored text
    Dev,
    /// One JSON object per line
    #[default]
    Prod,
}

/// Logger implementation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Appender pipeline writing JSON or text records
    #[default]
    Structured,
    /// Delegates to the `tracing` ecosystem
    Tracing,
    /// Buffers formatted lines in memory, for tests
    InMemory,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Structured => "structured",
            Backend::Tracing => "tracing",
            Backend::InMemory => "in-memory",
        }
    }

    /// Whether loggers of this backend support level changes at runtime
    pub fn supports_dynamic_level(&self) -> bool {
        !matches!(self, Backend::InMemory)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "structured" => Ok(Backend::Structured),
            "tracing" => Ok(Backend::Tracing),
            "in-memory" => Ok(Backend::InMemory),
            _ => Err(LoggerError::unsupported_backend(s)),
        }
    }
}

/// Logger configuration
///
/// # Example
///
/// ```
/// use rust_logger_facade::{Backend, Config, Environment, LogLevel};
///
/// let config: Config = serde_json::from_str(
///     r#"{"level": "warn", "environment": "dev", "backend": "in-memory"}"#,
/// ).unwrap();
///
/// assert_eq!(config.backend().unwrap(), Backend::InMemory);
/// assert_eq!(config.environment, Environment::Dev);
/// assert_eq!(config.resolve_level(|_| None), LogLevel::Warn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial level; invalid or absent values fall back to `info`
    pub level: Option<String>,
    pub environment: Environment,
    /// Backend selector, see [`Backend`]
    pub backend: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: None,
            environment: Environment::default(),
            backend: Backend::default().as_str().to_string(),
        }
    }
}

impl Config {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend: backend.as_str().to_string(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Parse the backend selector
    pub fn backend(&self) -> Result<Backend> {
        self.backend.parse()
    }

    /// Resolve the initial level using `lookup` for the environment override
    pub fn resolve_level<F>(&self, lookup: F) -> LogLevel
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(LOG_LEVEL_ENV_VAR)
            .and_then(|value| value.parse().ok())
            .or_else(|| self.level.as_deref().and_then(|value| value.parse().ok()))
            .unwrap_or_default()
    }
}
