//! Timestamp layouts used by the output formats

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp layout for a record's time field
///
/// # Examples
///
/// ```
/// use rust_kvlog::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let time = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Terminal.format(&time), "01-08|10:30:45");
/// assert_eq!(TimestampFormat::Logfmt.format(&time), "2025-01-08T10:30:45+0000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Compact month-day|time layout for interactive terminals: `01-08|10:30:45`
    Terminal,

    /// Second precision with numeric offset: `2025-01-08T10:30:45+0000`
    Logfmt,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with offset: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible layout
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Terminal => datetime.format("%m-%d|%H:%M:%S").to_string(),
            TimestampFormat::Logfmt => datetime.format("%Y-%m-%dT%H:%M:%S%z").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(layout) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(layout)).is_err() {
                    out = datetime.to_rfc3339();
                }
                out
            }
        }
    }

    /// Reject a `Custom` layout containing unknown strftime specifiers.
    ///
    /// Formatting with such a layout falls back to RFC 3339.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(layout) = self {
            if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime layout '{}'", layout),
                ));
            }
        }
        Ok(())
    }

    /// Check if this is a numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}
