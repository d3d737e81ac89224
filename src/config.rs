//! Serde-loadable logger configuration
//!
//! ```
//! use rust_kvlog::config::LoggerConfig;
//! use rust_kvlog::Level;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "level": "warn",
//!     "format": "json",
//!     "target": "stderr",
//!     "key_names": { "msg": "message" }
//! }"#).unwrap();
//!
//! let logger = config.build();
//! assert_eq!(logger.level(), Level::Warn);
//! assert_eq!(logger.key_names().msg, "message");
//! ```

use crate::core::{
    Level, Logger, LoggerBuilder, LoggerError, OutputFormat, RecordKeyNames, Result,
    TimestampFormat,
};
use crate::handlers::StreamHandler;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};

/// Output format selection; `Auto` picks terminal or logfmt by whether the
/// target is an interactive terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    #[default]
    Auto,
    Terminal,
    Logfmt,
    Json,
}

impl FormatChoice {
    pub fn resolve(self, is_terminal: bool) -> OutputFormat {
        match self {
            FormatChoice::Auto => OutputFormat::for_destination(is_terminal),
            FormatChoice::Terminal => OutputFormat::Terminal,
            FormatChoice::Logfmt => OutputFormat::Logfmt,
            FormatChoice::Json => OutputFormat::Json,
        }
    }
}

impl From<OutputFormat> for FormatChoice {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => FormatChoice::Terminal,
            OutputFormat::Logfmt => FormatChoice::Logfmt,
            OutputFormat::Json => FormatChoice::Json,
        }
    }
}

/// Standard stream a configured logger writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: Level,
    pub key_names: RecordKeyNames,
    pub format: FormatChoice,
    pub target: OutputTarget,
    /// Overrides the format's default timestamp layout
    pub timestamp: Option<TimestampFormat>,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde accepts but formatting cannot use
    pub fn validate(&self) -> Result<()> {
        if let Some(timestamp) = &self.timestamp {
            timestamp.validate()?;
        }
        Ok(())
    }

    /// The format used for a destination with the given terminal status
    pub fn output_format(&self, is_terminal: bool) -> OutputFormat {
        self.format.resolve(is_terminal)
    }

    /// A builder with level, key names and handler already applied
    pub fn builder(&self) -> LoggerBuilder {
        let builder = Logger::builder()
            .level(self.level)
            .key_names(self.key_names.clone());

        match self.target {
            OutputTarget::Stdout => {
                let format = self.output_format(io::stdout().is_terminal());
                builder.handler(self.stream(io::stdout(), format, "stdout"))
            }
            OutputTarget::Stderr => {
                let format = self.output_format(io::stderr().is_terminal());
                builder.handler(self.stream(io::stderr(), format, "stderr"))
            }
        }
    }

    pub fn build(&self) -> Logger {
        self.builder().build()
    }

    fn stream<W: Write + Send>(
        &self,
        writer: W,
        format: OutputFormat,
        name: &'static str,
    ) -> StreamHandler<W> {
        let handler = StreamHandler::new(writer, format).with_name(name);
        match &self.timestamp {
            Some(timestamp) => handler.with_timestamp_format(timestamp.clone()),
            None => handler,
        }
    }
}
