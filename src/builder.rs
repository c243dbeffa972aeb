//! Logger construction

use crate::appenders::SharedWriter;
use crate::backends::{InMemoryLogger, StructuredLogger, TracingLogger};
use crate::core::{
    process_env, Backend, Config, Environment, LogLevel, LoggerError, Result, SharedLogger,
};
use std::fmt;
use std::sync::Arc;

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Construct a logger from `config`, reading the level override from the
/// process environment
///
/// `AZA_LOG_LEVEL` applies to every backend, the in-memory one included, so
/// an in-memory logger built here depends on the environment. Tests wanting
/// a fixed level should use [`InMemoryLogger::new`] or
/// [`LoggerBuilder::env_lookup`].
///
/// # Example
/// ```
/// use rust_logger_facade::prelude::*;
///
/// let logger = new_logger(&Config::new(Backend::InMemory).with_level("warn")).unwrap();
/// assert!(!logger.level_handler(None).supports_dynamic_level());
///
/// let err = new_logger(&Config { backend: "syslog".into(), ..Config::default() }).unwrap_err();
/// assert_eq!(err.to_string(), "unsupported logger backend: 'syslog'");
/// ```
pub fn new_logger(config: &Config) -> Result<SharedLogger> {
    LoggerBuilder::new().config(config.clone()).build()
}

/// Builder for constructing any backend with a fluent API
///
/// # Example
/// ```
/// use rust_logger_facade::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = LoggerBuilder::new()
///     .backend(Backend::Structured)
///     .environment(Environment::Prod)
///     .level(LogLevel::Debug)
///     .env_lookup(|_| None)
///     .writer(sink.writer())
///     .build()
///     .unwrap();
///
/// logger.debug("cache warmed", &[&"entries", &128]);
/// assert!(sink.contents().contains(r#""entries":"128""#));
/// ```
pub struct LoggerBuilder {
    config: Config,
    env_lookup: EnvLookup,
    writer: Option<SharedWriter>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            env_lookup: Box::new(process_env),
            writer: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the configured initial level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = Some(level.as_str().to_string());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend.as_str().to_string();
        self
    }

    /// Select the backend by name; unknown names fail in [`build`](Self::build)
    #[must_use = "builder methods return a new value"]
    pub fn backend_name(mut self, name: impl Into<String>) -> Self {
        self.config.backend = name.into();
        self
    }

    /// Replace the environment lookup used for the level override
    #[must_use = "builder methods return a new value"]
    pub fn env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env_lookup = Box::new(lookup);
        self
    }

    /// Send output to `writer` instead of the console.
    ///
    /// Not accepted by the in-memory backend, which keeps its own buffer.
    #[must_use = "builder methods return a new value"]
    pub fn writer(mut self, writer: SharedWriter) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Build the logger
    pub fn build(self) -> Result<SharedLogger> {
        let backend = self.config.backend()?;
        let level = self.config.resolve_level(&self.env_lookup);
        let environment = self.config.environment;

        let logger: SharedLogger = match (backend, self.writer) {
            (Backend::InMemory, Some(_)) => {
                return Err(LoggerError::config(
                    "writer",
                    "the in-memory backend does not accept an output writer",
                ))
            }
            (Backend::InMemory, None) => Arc::new(InMemoryLogger::new(level)),
            (Backend::Structured, Some(writer)) => {
                Arc::new(StructuredLogger::with_writer(level, environment, writer))
            }
            (Backend::Structured, None) => Arc::new(StructuredLogger::new(level, environment)),
            (Backend::Tracing, Some(writer)) => {
                Arc::new(TracingLogger::with_writer(level, environment, writer))
            }
            (Backend::Tracing, None) => Arc::new(TracingLogger::new(level, environment)),
        };

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("writer", &self.writer.is_some())
            .finish_non_exhaustive()
    }
}
