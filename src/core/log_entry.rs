//! Log entry structure

use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};

/// A record on its way to an [`Appender`](super::Appender)
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub context: LogContext,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: &str) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message),
            timestamp: Utc::now(),
            context: LogContext::new(),
        }
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_sanitized() {
        let entry = LogEntry::new(LogLevel::Info, "login\nERROR fake\tentry\r");
        assert_eq!(entry.message, "login\\nERROR fake\\tentry\\r");
    }

    #[test]
    fn test_with_context() {
        let entry = LogEntry::new(LogLevel::Warn, "disk almost full")
            .with_context(LogContext::new().with_field("mount", "/var"));

        assert_eq!(entry.context.get("mount"), Some("/var"));
    }
}
