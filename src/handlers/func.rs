//! Closure-backed handler

use crate::core::{Handler, Record, Result};
use std::fmt;

/// Adapts a closure into a [`Handler`]
///
/// # Example
///
/// ```
/// use rust_kvlog::handlers::FuncHandler;
/// use rust_kvlog::prelude::*;
///
/// let handler = FuncHandler::new(|record: &Record| {
///     eprintln!("{} {}", record.level, record.message);
///     Ok(())
/// });
/// let logger = Logger::builder().handler(handler).build();
/// logger.warn("routed through a closure", kv![]);
/// ```
pub struct FuncHandler<F> {
    func: F,
}

impl<F> FuncHandler<F>
where
    F: Fn(&Record) -> Result<()> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Handler for FuncHandler<F>
where
    F: Fn(&Record) -> Result<()> + Send + Sync,
{
    fn log(&self, record: &Record) -> Result<()> {
        (self.func)(record)
    }
}

impl<F> fmt::Debug for FuncHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FuncHandler(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_closure_is_called() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let handler = FuncHandler::new(move |record: &Record| {
            assert_eq!(record.message, "hi");
            calls_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        handler.log(&Record::new(Level::Info, "hi", Vec::new())).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
