//! Logging macros for ergonomic log message formatting.
//!
//! The message takes `format!` arguments. Key/value pairs follow a `;` and
//! may be any `Display` expressions:
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::{info, warn};
//!
//! let logger = InMemoryLogger::new(LogLevel::Info);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments and fields
//! let port = 8080;
//! info!(logger, "Listening on port {}", port; "tls", false);
//! warn!(logger, "Slow request"; "path", "/orders", "elapsed_ms", 1200);
//!
//! assert_eq!(logger.entries()[1], "[INFO] Listening on port 8080 tls=false");
//! assert_eq!(logger.entries()[2], "[WARN] Slow request path=/orders elapsed_ms=1200");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = InMemoryLogger::new(LogLevel::Debug);
/// use rust_logger_facade::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500; "retryable", true);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($kv:expr),+ $(,)?) => {{
        use $crate::Logger as _;
        $logger.log(
            $level,
            &format!($fmt $(, $arg)*),
            &[$(&$kv as &dyn ::std::fmt::Display),+],
        )
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.log($level, &format!($($arg)+), &[])
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = InMemoryLogger::new(LogLevel::Debug);
/// use rust_logger_facade::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10; "shard", 3);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = InMemoryLogger::new(LogLevel::Debug);
/// use rust_logger_facade::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error"; "attempt", 2);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// Backends writing to real outputs terminate the process afterwards.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = InMemoryLogger::new(LogLevel::Debug);
/// use rust_logger_facade::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::backends::InMemoryLogger;
    use crate::core::{LogLevel, SharedLogger};
    use std::sync::Arc;

    #[test]
    fn test_log_macro() {
        let logger = InMemoryLogger::new(LogLevel::Info);
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        log!(logger, LogLevel::Debug, "Filtered");

        assert_eq!(
            logger.entries(),
            vec!["[INFO] Test message", "[INFO] Formatted: 42", ""]
        );
    }

    #[test]
    fn test_level_macros() {
        let logger = InMemoryLogger::new(LogLevel::Debug);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        fatal!(logger, "Recorded, not exiting");

        assert_eq!(
            logger.entries(),
            vec![
                "[DEBUG] Count: 5",
                "[INFO] Items: 100",
                "[WARN] Retry 1 of 3",
                "[ERROR] Code: 500",
                "[FATAL] Recorded, not exiting",
                "",
            ]
        );
    }

    #[test]
    fn test_key_values() {
        let logger = InMemoryLogger::new(LogLevel::Info);
        let user_id = 42;
        info!(logger, "User {} logged in", user_id; "method", "oauth", "mfa", true);
        info!(logger, "Checkout"; "total", 10 + 5,);

        let entries = logger.entries();
        assert_eq!(entries[0], "[INFO] User 42 logged in method=oauth mfa=true");
        assert_eq!(entries[1], "[INFO] Checkout total=15");
    }

    #[test]
    fn test_shared_logger() {
        let memory = InMemoryLogger::new(LogLevel::Info);
        let logger: SharedLogger = Arc::new(memory.clone());
        warn!(logger, "Through a shared handle"; "k", "v");

        assert_eq!(memory.entries()[0], "[WARN] Through a shared handle k=v");
    }
}
