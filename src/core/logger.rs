//! The backend-agnostic logger interface

use super::log_context::KeyValues;
use super::log_level::LogLevel;
use super::tracing_context::TracingContext;
use crate::http::{AuthorizationHandler, LevelHandler};
use std::fmt;
use std::sync::Arc;

/// Shared handle to any [`Logger`] implementation
pub type SharedLogger = Arc<dyn Logger>;

/// Leveled, structured logging with runtime level control.
///
/// Key/value arguments are a flat slice alternating keys and values; a
/// trailing key without a value is dropped. The `debug!`..`fatal!` macros
/// build that slice from plain expressions.
///
/// # Example
///
/// ```
/// use rust_logger_facade::prelude::*;
///
/// let logger = InMemoryLogger::new(LogLevel::Info);
/// let service = logger.with_fields(&[&"app", &"billing"]);
///
/// service.info("startup complete", &[&"port", &8080]);
/// service.debug("not recorded", &[]);
///
/// assert_eq!(logger.entries()[0], "[INFO] startup complete port=8080 app=billing");
/// ```
pub trait Logger: fmt::Debug + Send + Sync {
    /// Emit `message` at `level` if the current level allows it
    fn log(&self, level: LogLevel, message: &str, kv: KeyValues<'_>);

    #[inline]
    fn debug(&self, message: &str, kv: KeyValues<'_>) {
        self.log(LogLevel::Debug, message, kv);
    }

    #[inline]
    fn info(&self, message: &str, kv: KeyValues<'_>) {
        self.log(LogLevel::Info, message, kv);
    }

    #[inline]
    fn warn(&self, message: &str, kv: KeyValues<'_>) {
        self.log(LogLevel::Warn, message, kv);
    }

    #[inline]
    fn error(&self, message: &str, kv: KeyValues<'_>) {
        self.log(LogLevel::Error, message, kv);
    }

    /// Emit at fatal level. Backends writing to real outputs terminate the
    /// process afterwards; the in-memory backend only records the entry.
    #[inline]
    fn fatal(&self, message: &str, kv: KeyValues<'_>) {
        self.log(LogLevel::Fatal, message, kv);
    }

    /// Flush buffered output, if the backend has any
    fn sync(&self);

    /// Logger that attaches the complete pairs of `kv` to every later record
    fn with_fields(&self, kv: KeyValues<'_>) -> SharedLogger;

    /// Logger that carries `trace_id` and `span_id` from `ctx`. An invalid
    /// context yields an equivalent logger without extra fields.
    fn with_context(&self, ctx: &TracingContext) -> SharedLogger;

    /// HTTP handler reading and changing this logger's level.
    ///
    /// Backends without runtime level support ignore `authorize` and answer
    /// every request with `501 Not Implemented`.
    fn level_handler(&self, authorize: Option<AuthorizationHandler>) -> LevelHandler;

    /// Current minimum level
    fn level(&self) -> LogLevel;

    /// Textual form of the current minimum level, e.g. `"info"`
    fn current_level(&self) -> &'static str {
        self.level().as_str()
    }
}
