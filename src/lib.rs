//! # Rust Logger Facade
//!
//! A backend-agnostic logging interface with leveled, structured records and
//! runtime level control over HTTP.
//!
//! ## Features
//!
//! - **One Interface**: application code depends on [`Logger`] only
//! - **Pluggable Backends**: JSON/text appender pipeline, `tracing`, and an
//!   in-memory recorder for tests
//! - **Runtime Level Control**: read or change the level of a running process
//!   with `GET`/`PUT` on a single endpoint
//! - **Thread Safe**: every logger is `Send + Sync` and cheap to share
//!
//! ## Quick start
//!
//! ```
//! use rust_logger_facade::prelude::*;
//!
//! let logger = new_logger(&Config::new(Backend::InMemory)).unwrap();
//! let request_logger = logger.with_fields(&[&"request_id", &"r-17"]);
//!
//! request_logger.info("order accepted", &[&"order_id", &1234]);
//! request_logger.debug("not recorded at the default level", &[]);
//! ```

pub mod appenders;
pub mod backends;
pub mod builder;
pub mod core;
pub mod http;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{MemorySink, SharedWriter, StreamAppender};
    pub use crate::backends::{InMemoryLogger, StructuredLogger, TracingLogger};
    pub use crate::builder::{new_logger, LoggerBuilder};
    pub use crate::core::{
        should_emit, Appender, Backend, Config, Environment, KeyValues, LevelStore, LogContext,
        LogEntry, LogLevel, Logger, LoggerError, OutputFormat, Result, SharedLogger,
        TimestampFormat, TracingContext, LOG_LEVEL_ENV_VAR,
    };
    pub use crate::http::{authorization, AuthorizationHandler, LevelHandler};
}

pub use self::appenders::{MemorySink, SharedWriter, StreamAppender};
pub use self::backends::{InMemoryLogger, StructuredLogger, TracingLogger};
pub use self::builder::{new_logger, LoggerBuilder};
pub use self::core::{
    process_env, should_emit, Appender, Backend, Config, Environment, KeyValues, LevelStore,
    LogContext, LogEntry, LogLevel, Logger, LoggerError, OutputFormat, Result, SharedLogger,
    TimestampFormat, TracingContext, LOG_LEVEL_ENV_VAR,
};
pub use self::http::{authorization, AuthorizationHandler, LevelHandler, LevelPayload};
