//! Process-wide root logger
//!
//! The root is created on first use with [`stdout_handler`] and level
//! `Debug`, or explicitly with [`init_root`] before anything touches it.
//! The free functions here forward to the root and report the caller's
//! line as the record's call site.
//!
//! ```
//! use rust_kvlog::{kv, root};
//!
//! let db = root::new(kv!["module", "db"]);
//! db.info("connected", kv!["pool", 8]);
//! root::info("started", kv!["version", "1.0"]);
//! ```

use crate::core::{Handler, Level, Logger, LoggerError, Result, Value};
use crate::handlers::stdout_handler;
use std::fmt;
use std::sync::{Arc, OnceLock};

static ROOT: OnceLock<Logger> = OnceLock::new();

/// The root logger, initialized with the stdout handler on first call
pub fn root() -> &'static Logger {
    ROOT.get_or_init(|| Logger::builder().handler(stdout_handler()).build())
}

/// Install `logger` as the root.
///
/// Fails with [`LoggerError::RootAlreadyInitialized`] if the root was
/// already installed or already used.
pub fn init_root(logger: Logger) -> Result<()> {
    ROOT.set(logger)
        .map_err(|_| LoggerError::RootAlreadyInitialized)
}

/// A child of the root carrying `context`, at the root's current level
pub fn new(context: Vec<Value>) -> Logger {
    root().derive(context)
}

pub fn new_with_level(level: Level, context: Vec<Value>) -> Logger {
    root().derive_with_level(level, context)
}

pub fn set_level(level: Level) {
    root().set_level(level);
}

/// Replace the root's handler. Loggers already derived keep theirs.
pub fn set_handler(handler: Arc<dyn Handler>) {
    root().set_handler(handler);
}

#[track_caller]
pub fn debug(msg: impl fmt::Display, context: Vec<Value>) {
    root().debug(msg, context);
}

#[track_caller]
pub fn info(msg: impl fmt::Display, context: Vec<Value>) {
    root().info(msg, context);
}

#[track_caller]
pub fn warn(msg: impl fmt::Display, context: Vec<Value>) {
    root().warn(msg, context);
}

#[track_caller]
pub fn error(msg: impl fmt::Display, context: Vec<Value>) {
    root().error(msg, context);
}

#[track_caller]
pub fn crit(msg: impl fmt::Display, context: Vec<Value>) {
    root().crit(msg, context);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    root().debugf(args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    root().infof(args);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    root().warnf(args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    root().errorf(args);
}

#[track_caller]
pub fn critf(args: fmt::Arguments<'_>) {
    root().critf(args);
}

/// Write a critical record through the root, then panic with `msg`
#[track_caller]
pub fn panic(msg: impl fmt::Display, context: Vec<Value>) -> ! {
    root().panic(msg, context)
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    root().panicf(args)
}
