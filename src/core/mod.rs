//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod level_store;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod timestamp;
pub mod tracing_context;

pub use appender::Appender;
pub use config::{process_env, Backend, Config, Environment, LOG_LEVEL_ENV_VAR};
pub use error::{LoggerError, Result};
pub use level_store::LevelStore;
pub use log_context::{pairs, KeyValues, LogContext};
pub use log_entry::LogEntry;
pub use log_level::{should_emit, LogLevel};
pub use logger::{Logger, SharedLogger};
pub use output_format::OutputFormat;
pub use timestamp::TimestampFormat;
pub use tracing_context::TracingContext;
