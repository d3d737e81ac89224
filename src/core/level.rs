//! Log level definitions
//!
//! Levels are ordered by severity: a *smaller* ordinal is *more* severe.
//! `Crit` is the most severe level and `Debug` the least, so a logger whose
//! floor is `Warn` lets through `Crit`, `Error` and `Warn`.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[repr(u8)]
pub enum Level {
    Crit = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    #[default]
    Debug = 4,
}

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Level; 5] = [
        Level::Crit,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Level::Crit),
            1 => Some(Level::Error),
            2 => Some(Level::Warn),
            3 => Some(Level::Info),
            4 => Some(Level::Debug),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Crit => "crit",
            Level::Error => "eror",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "dbug",
        }
    }

    /// Returns true when a record at `self` passes a gate set at `floor`.
    #[inline]
    pub fn is_at_least_as_severe_as(self, floor: Level) -> bool {
        self <= floor
    }

    #[cfg(feature = "console")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Crit => Magenta,
            Level::Error => Red,
            Level::Warn => Yellow,
            Level::Info => Green,
            Level::Debug => Cyan,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Accepts the canonical short names plus the `error` and `debug` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" | "dbug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" | "eror" => Ok(Level::Error),
            "crit" => Ok(Level::Crit),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_str().to_string()
    }
}

impl TryFrom<String> for Level {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, LoggerError> {
        s.parse()
    }
}
