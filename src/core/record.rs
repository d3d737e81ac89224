//! Log record structure

use super::level::Level;
use super::value::Value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;

pub const DEFAULT_TIME_KEY: &str = "t";
pub const DEFAULT_MSG_KEY: &str = "msg";
pub const DEFAULT_LVL_KEY: &str = "lvl";

/// Source location of the user code that emitted a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallSite {
    /// Capture the location of the nearest caller not marked `#[track_caller]`
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// The file name without its directories
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

/// Field names used for the built-in record properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordKeyNames {
    pub time: String,
    pub msg: String,
    pub lvl: String,
}

impl Default for RecordKeyNames {
    fn default() -> Self {
        Self {
            time: DEFAULT_TIME_KEY.to_string(),
            msg: DEFAULT_MSG_KEY.to_string(),
            lvl: DEFAULT_LVL_KEY.to_string(),
        }
    }
}

/// What a logger asks its handler to write
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    /// Alternating keys and values, always of even length
    pub context: Vec<Value>,
    pub call: CallSite,
    pub key_names: RecordKeyNames,
}

impl Record {
    /// Build a record stamped with the current time and the caller's location
    #[track_caller]
    pub fn new(level: Level, message: impl Into<String>, context: Vec<Value>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            context,
            call: CallSite::caller(),
            key_names: RecordKeyNames::default(),
        }
    }

    #[must_use]
    pub fn with_key_names(mut self, key_names: RecordKeyNames) -> Self {
        self.key_names = key_names;
        self
    }

    /// Iterate the context as `(key, value)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.context.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// First value stored under a string key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_site_points_here() {
        let (line, site) = (line!(), CallSite::caller());
        assert_eq!(site.line, line);
        assert_eq!(site.file, file!());
        assert_eq!(site.file_name(), "record.rs");
    }

    #[test]
    fn test_call_site_display() {
        let site = CallSite {
            file: "src/app/server.rs",
            line: 12,
            column: 5,
        };
        assert_eq!(site.to_string(), "server.rs:12");
    }

    #[test]
    fn test_default_key_names() {
        let names = RecordKeyNames::default();
        assert_eq!(names.time, "t");
        assert_eq!(names.msg, "msg");
        assert_eq!(names.lvl, "lvl");
    }

    #[test]
    fn test_partial_key_names_from_json() {
        let names: RecordKeyNames = serde_json::from_str(r#"{"msg":"message"}"#).unwrap();
        assert_eq!(names.msg, "message");
        assert_eq!(names.time, "t");
    }

    #[test]
    fn test_pairs_and_get() {
        let record = Record::new(
            Level::Info,
            "hello",
            vec![Value::from("a"), Value::from(1), Value::from("b"), Value::from(2)],
        );
        assert_eq!(record.pairs().count(), 2);
        assert_eq!(record.get("b"), Some(&Value::from(2)));
        assert_eq!(record.get("c"), None);
    }
}
