//! In-memory handler for tests

use crate::core::{Handler, Record, Result};
use parking_lot::Mutex;

/// Keeps every record it receives
///
/// Intended for asserting on log output in tests.
///
/// # Example
///
/// ```
/// use rust_kvlog::handlers::MemoryHandler;
/// use rust_kvlog::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryHandler::new());
/// let logger = Logger::builder().shared_handler(memory.clone()).build();
/// logger.info("captured", kv!["k", 1]);
///
/// assert_eq!(memory.len(), 1);
/// assert_eq!(memory.last().unwrap().message, "captured");
/// ```
#[derive(Debug, Default)]
pub struct MemoryHandler {
    records: Mutex<Vec<Record>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all captured records, oldest first
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn last(&self) -> Option<Record> {
        self.records.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Handler for MemoryHandler {
    fn log(&self, record: &Record) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }
}
