//! In-memory logger for tests
//!
//! Records render as `[LEVEL] message key=value ... field ...` lines in an
//! append-only buffer. Call-site pairs come first, injected fields after.
//!
//! Handles returned by [`Logger::with_fields`] and [`Logger::with_context`]
//! point at the same instance: fields injected through any handle show up in
//! records written through every other handle.
//!
//! `fatal` records the entry and returns; it never terminates the process.

use crate::core::{pairs, KeyValues, LogLevel, Logger, SharedLogger, TracingContext};
use crate::http::{AuthorizationHandler, LevelHandler};
use parking_lot::Mutex;
use std::fmt::Write;
use std::sync::Arc;

const INITIAL_CAPACITY: usize = 1024;

#[derive(Debug)]
struct State {
    level: LogLevel,
    buffer: String,
    injected_fields: Vec<String>,
}

/// Level-gated logger accumulating formatted lines in memory.
///
/// Its level is fixed at construction; the level control endpoint of this
/// backend answers `501 Not Implemented`.
#[derive(Debug, Clone)]
pub struct InMemoryLogger {
    state: Arc<Mutex<State>>,
}

impl InMemoryLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                level,
                buffer: String::with_capacity(INITIAL_CAPACITY),
                injected_fields: Vec::with_capacity(2),
            })),
        }
    }

    /// All recorded lines, split on `\n`.
    ///
    /// The final element is always the empty string left after the last
    /// line terminator; a logger with no records returns `[""]`.
    pub fn entries(&self) -> Vec<String> {
        let state = self.state.lock();
        state.buffer.split('\n').map(String::from).collect()
    }

    /// Whether both handles share one underlying instance
    pub fn same_instance(&self, other: &InMemoryLogger) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl Logger for InMemoryLogger {
    fn log(&self, level: LogLevel, message: &str, kv: KeyValues<'_>) {
        let mut state = self.state.lock();
        if !state.level.allows(level) {
            return;
        }

        let State {
            buffer,
            injected_fields,
            ..
        } = &mut *state;

        // Writing into a String cannot fail
        let _ = write!(buffer, "[{}] {}", level.to_str(), message);
        for (key, value) in pairs(kv) {
            let _ = write!(buffer, " {}={}", key, value);
        }
        for field in injected_fields.iter() {
            buffer.push(' ');
            buffer.push_str(field);
        }
        buffer.push('\n');
    }

    fn sync(&self) {}

    fn with_fields(&self, kv: KeyValues<'_>) -> SharedLogger {
        {
            let mut state = self.state.lock();
            for (key, value) in pairs(kv) {
                state.injected_fields.push(format!("{}={}", key, value));
            }
        }
        Arc::new(self.clone())
    }

    fn with_context(&self, _ctx: &TracingContext) -> SharedLogger {
        Arc::new(self.clone())
    }

    fn level_handler(&self, _authorize: Option<AuthorizationHandler>) -> LevelHandler {
        LevelHandler::unsupported()
    }

    fn level(&self) -> LogLevel {
        self.state.lock().level
    }
}
