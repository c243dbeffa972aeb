//! Structured backend: records flow through one appender
//!
//! Every record carries a UTC timestamp, the level, the message and its
//! fields. Fields injected through `with_fields`/`with_context` come first,
//! call-site pairs follow. Output is JSON in production and colored text in
//! development.

use crate::appenders::{SharedWriter, StreamAppender};
use crate::core::{
    Appender, Environment, KeyValues, LevelStore, LogContext, LogEntry, LogLevel, Logger,
    OutputFormat, SharedLogger, TracingContext,
};
use crate::http::{AuthorizationHandler, LevelHandler};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Appender-driven logger with a runtime-adjustable level.
///
/// Clones and derived loggers share the level and the appender; only the
/// injected fields differ.
#[derive(Clone)]
pub struct StructuredLogger {
    level: LevelStore,
    appender: Arc<Mutex<Box<dyn Appender>>>,
    fields: LogContext,
}

impl StructuredLogger {
    /// Logger writing to the console in the format of `environment`
    pub fn new(level: LogLevel, environment: Environment) -> Self {
        let appender =
            StreamAppender::console().with_output_format(OutputFormat::for_environment(environment));
        Self::from_appender(level, appender)
    }

    /// Logger writing every record to `writer`
    pub fn with_writer(level: LogLevel, environment: Environment, writer: SharedWriter) -> Self {
        let appender = StreamAppender::writer(writer)
            .with_output_format(OutputFormat::for_environment(environment))
            .with_colors(false);
        Self::from_appender(level, appender)
    }

    pub fn from_appender<A: Appender + 'static>(level: LogLevel, appender: A) -> Self {
        Self {
            level: LevelStore::new(level),
            appender: Arc::new(Mutex::new(Box::new(appender))),
            fields: LogContext::new(),
        }
    }

    /// Store backing this logger's level
    pub fn level_store(&self) -> &LevelStore {
        &self.level
    }

    /// Fields injected into every record
    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    fn derive(&self, extra: LogContext) -> SharedLogger {
        let mut fields = self.fields.clone();
        fields.extend(&extra);
        Arc::new(Self {
            level: self.level.clone(),
            appender: Arc::clone(&self.appender),
            fields,
        })
    }

    fn write(&self, entry: &LogEntry) {
        let mut appender = self.appender.lock();
        if let Err(e) = appender.append(entry) {
            eprintln!("[LOGGER ERROR] Appender {} failed: {}", appender.name(), e);
        }
    }

    fn flush(&self) {
        let mut appender = self.appender.lock();
        if let Err(e) = appender.flush() {
            eprintln!("[LOGGER ERROR] Appender {} flush failed: {}", appender.name(), e);
        }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, level: LogLevel, message: &str, kv: KeyValues<'_>) {
        if !self.level.enabled(level) {
            return;
        }

        let mut context = self.fields.clone();
        context.extend_pairs(kv);
        self.write(&LogEntry::new(level, message).with_context(context));

        if level == LogLevel::Fatal {
            self.flush();
            std::process::exit(1);
        }
    }

    fn sync(&self) {
        self.flush();
    }

    fn with_fields(&self, kv: KeyValues<'_>) -> SharedLogger {
        self.derive(LogContext::from_pairs(kv))
    }

    fn with_context(&self, ctx: &TracingContext) -> SharedLogger {
        if !ctx.is_valid() {
            return self.derive(LogContext::new());
        }
        self.derive(
            LogContext::new()
                .with_field("trace_id", &ctx.trace_id)
                .with_field("span_id", &ctx.span_id),
        )
    }

    fn level_handler(&self, authorize: Option<AuthorizationHandler>) -> LevelHandler {
        LevelHandler::dynamic(self.level.clone(), authorize)
    }

    fn level(&self) -> LogLevel {
        self.level.get()
    }
}

impl fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("level", &self.level.get())
            .field("appender", &self.appender.lock().name())
            .field("fields", &self.fields)
            .finish()
    }
}
