//! Stream handler implementation

use crate::core::{Handler, LoggerError, OutputFormat, Record, Result, TimestampFormat};
use parking_lot::Mutex;
use std::io::Write;

/// Writes each formatted record to an `io::Write`
///
/// The writer is behind a mutex, so concurrent records never interleave
/// within a line.
///
/// # Example
///
/// ```
/// use rust_kvlog::handlers::StreamHandler;
/// use rust_kvlog::prelude::*;
///
/// let handler = StreamHandler::new(Vec::new(), OutputFormat::Logfmt);
/// let logger = Logger::builder().handler(handler).build();
/// logger.info("written to a Vec", kv![]);
/// ```
pub struct StreamHandler<W: Write + Send> {
    writer: Mutex<W>,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
    name: &'static str,
}

impl<W: Write + Send> StreamHandler<W> {
    pub fn new(writer: W, output_format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamp_format: output_format.default_timestamp(),
            output_format,
            name: "stream",
        }
    }

    /// Override the timestamp layout of the output format
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Name used in write errors
    #[must_use]
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Consume the handler and return the writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Handler for StreamHandler<W> {
    fn log(&self, record: &Record) -> Result<()> {
        let line = self.output_format.format(record, &self.timestamp_format);

        let mut writer = self.writer.lock();
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| LoggerError::handler_write(self.name, e))
    }
}
