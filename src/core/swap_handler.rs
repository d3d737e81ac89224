//! Concurrency-safe handler slot
//!
//! Every write reads the slot; reconfiguration replaces it. The read lock is
//! held only long enough to clone the `Arc`, never while the handler writes,
//! so a slow handler cannot stall a `swap` and a `swap` cannot deadlock
//! against in-flight writes. Each record goes to exactly one handler: whichever
//! was installed when its `log` call read the slot.

use super::{
    error::Result,
    handler::{DiscardHandler, Handler},
    record::Record,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

#[derive(Default)]
pub struct SwapHandler {
    current: RwLock<Option<Arc<dyn Handler>>>,
}

impl SwapHandler {
    /// An empty slot; records are dropped until a handler is installed
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    pub fn with_handler(handler: Arc<dyn Handler>) -> Self {
        Self {
            current: RwLock::new(Some(handler)),
        }
    }

    /// The installed handler, or a [`DiscardHandler`] if there is none
    pub fn get(&self) -> Arc<dyn Handler> {
        self.installed().unwrap_or_else(|| Arc::new(DiscardHandler))
    }

    pub fn installed(&self) -> Option<Arc<dyn Handler>> {
        self.current.read().clone()
    }

    /// Install `handler`, returning the one it replaces
    pub fn swap(&self, handler: Arc<dyn Handler>) -> Option<Arc<dyn Handler>> {
        self.current.write().replace(handler)
    }

    /// Forward to the installed handler; a silent no-op when the slot is empty
    pub fn log(&self, record: &Record) -> Result<()> {
        let handler = self.current.read().clone();
        match handler {
            Some(handler) => handler.log(record),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for SwapHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwapHandler")
            .field("installed", &self.current.read().is_some())
            .finish()
    }
}
