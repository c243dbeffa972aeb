//! `tracing` backend
//!
//! Records become `tracing` events delivered to a private [`Dispatch`] built
//! from `tracing_subscriber::fmt`. The logger never touches the global
//! default subscriber, so it coexists with whatever the host application
//! installs. Key/value pairs travel as a single `fields` value: a JSON object
//! in production, `key=value` text in development.

use crate::appenders::SharedWriter;
use crate::core::{
    Environment, KeyValues, LevelStore, LogContext, LogLevel, Logger, SharedLogger,
    TracingContext,
};
use crate::http::{AuthorizationHandler, LevelHandler};
use std::fmt;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use tracing::{Dispatch, Level};

macro_rules! emit {
    ($level:expr, $message:expr, $fields:expr $(, $flag:ident = $value:expr)?) => {
        if $fields.is_empty() {
            tracing::event!($level, $($flag = $value,)? "{}", $message)
        } else {
            tracing::event!($level, $($flag = $value,)? fields = %$fields, "{}", $message)
        }
    };
}

/// Logger backed by a `tracing_subscriber` formatter
#[derive(Clone)]
pub struct TracingLogger {
    dispatch: Dispatch,
    level: LevelStore,
    fields: LogContext,
    json_fields: bool,
}

impl TracingLogger {
    /// Logger writing to stdout
    pub fn new(level: LogLevel, environment: Environment) -> Self {
        Self::from_dispatch(level, environment, build_dispatch(environment, None))
    }

    /// Logger writing every event to `writer`
    pub fn with_writer(level: LogLevel, environment: Environment, writer: SharedWriter) -> Self {
        Self::from_dispatch(level, environment, build_dispatch(environment, Some(writer)))
    }

    /// Logger delivering events to an existing dispatcher.
    ///
    /// The dispatcher should admit every level; gating happens here.
    /// `environment` picks how the `fields` value is rendered.
    pub fn from_dispatch(level: LogLevel, environment: Environment, dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            level: LevelStore::new(level),
            fields: LogContext::new(),
            json_fields: environment == Environment::Prod,
        }
    }

    pub fn level_store(&self) -> &LevelStore {
        &self.level
    }

    fn derive(&self, extra: LogContext) -> SharedLogger {
        let mut fields = self.fields.clone();
        fields.extend(&extra);
        Arc::new(Self {
            dispatch: self.dispatch.clone(),
            level: self.level.clone(),
            fields,
            json_fields: self.json_fields,
        })
    }

    fn render_fields(&self, context: &LogContext) -> String {
        if context.is_empty() {
            return String::new();
        }
        if !self.json_fields {
            return context.format_fields();
        }
        serde_json::to_string(context).unwrap_or_else(|e| {
            eprintln!("[LOGGER ERROR] Failed to encode fields: {}", e);
            context.format_fields()
        })
    }
}

fn build_dispatch(environment: Environment, writer: Option<SharedWriter>) -> Dispatch {
    let builder = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .with_ansi(false);

    match (environment, writer) {
        (Environment::Prod, Some(writer)) => Dispatch::new(
            builder
                .json()
                .with_writer(move || writer.clone())
                .finish(),
        ),
        (Environment::Prod, None) => Dispatch::new(builder.json().finish()),
        (Environment::Dev, Some(writer)) => {
            Dispatch::new(builder.with_writer(move || writer.clone()).finish())
        }
        (Environment::Dev, None) => {
            Dispatch::new(builder.with_ansi(io::stdout().is_terminal()).finish())
        }
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, kv: KeyValues<'_>) {
        if !self.level.enabled(level) {
            return;
        }

        let mut context = self.fields.clone();
        context.extend_pairs(kv);
        let fields = self.render_fields(&context);

        tracing::dispatcher::with_default(&self.dispatch, || match level {
            LogLevel::Debug => emit!(Level::DEBUG, message, fields),
            LogLevel::Info => emit!(Level::INFO, message, fields),
            LogLevel::Warn => emit!(Level::WARN, message, fields),
            LogLevel::Error => emit!(Level::ERROR, message, fields),
            LogLevel::Fatal => emit!(Level::ERROR, message, fields, fatal = true),
        });

        if level == LogLevel::Fatal {
            std::process::exit(1);
        }
    }

    // fmt writers are unbuffered
    fn sync(&self) {}

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

impl fmt::Debug for TracingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingLogger")
            .field("level", &self.level.get())
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
