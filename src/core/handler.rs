//! Handler trait for log output destinations

use super::{error::Result, record::Record};

/// A sink that consumes records.
///
/// Handlers are shared between threads and called concurrently, so any
/// underlying I/O has to be serialized by the handler itself.
pub trait Handler: Send + Sync {
    fn log(&self, record: &Record) -> Result<()>;
}

/// Drops every record
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardHandler;

impl Handler for DiscardHandler {
    fn log(&self, _record: &Record) -> Result<()> {
        Ok(())
    }
}
