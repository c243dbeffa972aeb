//! Error types for the logger facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Backend selector that names no known implementation
    #[error("unsupported logger backend: '{0}'")]
    UnsupportedBackend(String),

    /// Level string outside of debug/info/warn/error/fatal
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Level control request body that is not a JSON level payload
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    pub fn unsupported_backend(selector: impl Into<String>) -> Self {
        LoggerError::UnsupportedBackend(selector.into())
    }

    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(level.into())
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        LoggerError::InvalidPayload(message.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Whether the error stems from bad client input rather than the logger
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidLevel(_) | LoggerError::InvalidPayload(_)
        )
    }
}
