//! Timestamp formatting utilities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options for rendered records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// UTC with second precision: `2025-01-08T10:30:45Z`
    #[default]
    Seconds,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_facade::core::TimestampFormat;
    /// use chrono::Utc;
    ///
    /// let timestamp = TimestampFormat::Seconds.format(&Utc::now());
    /// assert!(timestamp.ends_with('Z'));
    /// ```
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Seconds => datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
    }

    #[test]
    fn test_seconds_format() {
        assert_eq!(TimestampFormat::Seconds.format(&fixed()), "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_unix_millis_format() {
        let ts = TimestampFormat::UnixMillis;
        assert_eq!(ts.format(&fixed()), "1736332245000");
        assert!(ts.is_numeric());
        assert!(!TimestampFormat::Seconds.is_numeric());
    }
}
