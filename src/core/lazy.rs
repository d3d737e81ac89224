//! Deferred context values
//!
//! A [`Lazy`] placed in a context sequence is carried through the logger
//! untouched. Only a formatter calls [`Lazy::evaluate`], so an expensive value
//! is computed once per formatted record and never for gated-out records.

use super::value::Value;
use std::fmt;
use std::sync::Arc;

type LazyFn = dyn Fn() -> Result<Vec<Value>, String> + Send + Sync;

/// A zero-argument computation evaluated at format time
///
/// # Example
///
/// ```
/// use rust_kvlog::{kv, Lazy, Logger};
///
/// let logger = Logger::new(kv![]);
/// let expensive = Lazy::new(|| (1..=10u64).product::<u64>());
/// logger.info("computed", kv!["factorial", expensive]);
/// ```
#[derive(Clone)]
pub struct Lazy {
    func: Arc<LazyFn>,
}

impl Lazy {
    /// Wrap a computation producing a single value
    pub fn new<F, V>(func: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self {
            func: Arc::new(move || Ok(vec![func().into()])),
        }
    }

    /// Wrap a computation that may fail; the error text ends up in the output
    pub fn fallible<F, V, E>(func: F) -> Self
    where
        F: Fn() -> Result<V, E> + Send + Sync + 'static,
        V: Into<Value>,
        E: fmt::Display,
    {
        Self {
            func: Arc::new(move || func().map(|v| vec![v.into()]).map_err(|e| e.to_string())),
        }
    }

    /// Wrap a computation producing several values
    pub fn many<F>(func: F) -> Self
    where
        F: Fn() -> Vec<Value> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(move || Ok(func())),
        }
    }

    /// Run the computation.
    ///
    /// A single result is returned as-is, several results as [`Value::List`].
    pub fn evaluate(&self) -> Result<Value, String> {
        let mut values = (self.func)()?;
        if values.len() == 1 {
            Ok(values.remove(0))
        } else {
            Ok(Value::List(values))
        }
    }

    pub(crate) fn same_as(&self, other: &Lazy) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lazy(..)")
    }
}
