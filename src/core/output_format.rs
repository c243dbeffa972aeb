//! Output format configuration for log entries
//!
//! - Text: Human-readable format
//! - Json: Machine-readable JSON format (default)

use super::config::Environment;
use super::error::Result;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format
    ///
    /// Example: `2025-01-08T10:30:45Z INFO Request processed user=42`
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45Z","level":"INFO","message":"Request processed","user":"42"}`
    #[default]
    Json,
}

impl OutputFormat {
    /// Format used by the structured backends in `environment`
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Dev => OutputFormat::Text,
            Environment::Prod => OutputFormat::Json,
        }
    }

    /// Format a log entry according to this output format
    pub fn format(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> Result<String> {
        match self {
            OutputFormat::Text => {
                Ok(self.format_text(entry, timestamp_format, entry.level.to_str()))
            }
            OutputFormat::Json => self.format_json(entry, timestamp_format),
        }
    }

    /// Format as text with a caller-rendered level tag (e.g. colored)
    pub fn format_text(
        &self,
        entry: &LogEntry,
        timestamp_format: &TimestampFormat,
        level_tag: &str,
    ) -> String {
        let base = format!(
            "{} {:5} {}",
            timestamp_format.format(&entry.timestamp),
            level_tag,
            entry.message
        );

        if entry.context.is_empty() {
            base
        } else {
            format!("{} {}", base, entry.context.format_fields())
        }
    }

    fn format_json(&self, entry: &LogEntry, timestamp_format: &TimestampFormat) -> Result<String> {
        let record = JsonRecord {
            entry,
            timestamp_format,
        };
        Ok(serde_json::to_string(&record)?)
    }
}

/// Serializes a record keeping field insertion order
struct JsonRecord<'a> {
    entry: &'a LogEntry,
    timestamp_format: &'a TimestampFormat,
}

impl Serialize for JsonRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields = self.entry.context.fields();
        let mut map = serializer.serialize_map(Some(3 + fields.len()))?;

        if self.timestamp_format.is_numeric() {
            map.serialize_entry("timestamp", &self.entry.timestamp.timestamp_millis())?;
        } else {
            map.serialize_entry(
                "timestamp",
                &self.timestamp_format.format(&self.entry.timestamp),
            )?;
        }
        map.serialize_entry("level", self.entry.level.to_str())?;
        map.serialize_entry("message", &self.entry.message)?;
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
