//! Main logger implementation
//!
//! A [`Logger`] is one node in a tree. It owns the context prefix inherited
//! from its ancestors, its own level gate, and its own handler slot. Children
//! are created with [`Logger::derive`].
//!
//! Every public write path is `#[track_caller]` all the way down to where the
//! record is built, so the recorded [`CallSite`](super::record::CallSite) is
//! the user's line regardless of which entry point was used.

use super::{
    context::new_context,
    error::Result,
    handler::Handler,
    level::Level,
    record::{CallSite, Record, RecordKeyNames},
    swap_handler::SwapHandler,
    value::Value,
};
use chrono::Utc;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Pause between writing a critical record and panicking in
/// [`Logger::panic`], giving the handler chain time to flush it.
pub const PANIC_FLUSH_DELAY: Duration = Duration::from_millis(10);

pub struct Logger {
    max_level: AtomicU8,
    context: Vec<Value>,
    handler: SwapHandler,
    key_names: RecordKeyNames,
}

impl Logger {
    /// Create a root logger with no handler installed and level `Debug`
    #[must_use]
    pub fn new(context: Vec<Value>) -> Self {
        Self::from_parts(
            Level::Debug,
            new_context(&[], context),
            SwapHandler::new(),
            RecordKeyNames::default(),
        )
    }

    fn from_parts(
        level: Level,
        context: Vec<Value>,
        handler: SwapHandler,
        key_names: RecordKeyNames,
    ) -> Self {
        Self {
            max_level: AtomicU8::new(level.ordinal()),
            context,
            handler,
            key_names,
        }
    }

    /// Create a child logger carrying this logger's context plus `context`.
    ///
    /// The child starts with this logger's level and currently installed
    /// handler. Both are copied: later `set_level`/`set_handler` calls on
    /// either logger do not affect the other.
    #[must_use]
    pub fn derive(&self, context: Vec<Value>) -> Logger {
        self.derive_with_level(self.level(), context)
    }

    /// Like [`derive`](Self::derive) with an explicit level for the child
    #[must_use]
    pub fn derive_with_level(&self, level: Level, context: Vec<Value>) -> Logger {
        let handler = match self.handler.installed() {
            Some(current) => SwapHandler::with_handler(current),
            None => SwapHandler::new(),
        };
        Self::from_parts(
            level,
            new_context(&self.context, context),
            handler,
            self.key_names.clone(),
        )
    }

    #[inline]
    pub fn level(&self) -> Level {
        Level::from_ordinal(self.max_level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_level(&self, level: Level) {
        self.max_level.store(level.ordinal(), Ordering::Relaxed);
    }

    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level.is_at_least_as_severe_as(self.level())
    }

    pub fn get_handler(&self) -> Arc<dyn Handler> {
        self.handler.get()
    }

    pub fn set_handler(&self, handler: Arc<dyn Handler>) {
        self.handler.swap(handler);
    }

    /// The normalized context every record from this logger starts with
    pub fn context(&self) -> &[Value] {
        &self.context
    }

    pub fn key_names(&self) -> &RecordKeyNames {
        &self.key_names
    }

    /// Write a record and report handler failures to the caller.
    ///
    /// The leveled methods use the same path but swallow the error.
    #[track_caller]
    pub fn log(&self, level: Level, msg: impl fmt::Display, context: Vec<Value>) -> Result<()> {
        self.write(msg, level, context)
    }

    #[track_caller]
    fn write(&self, msg: impl fmt::Display, level: Level, context: Vec<Value>) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let record = Record {
            time: Utc::now(),
            level,
            message: msg.to_string(),
            context: new_context(&self.context, context),
            call: CallSite::caller(),
            key_names: self.key_names.clone(),
        };
        self.handler.log(&record)
    }

    #[track_caller]
    fn emit(&self, level: Level, msg: impl fmt::Display, context: Vec<Value>) {
        if let Err(e) = self.write(msg, level, context) {
            eprintln!("[LOGGER ERROR] Handler failed to write {} record: {}", level, e);
        }
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, msg: impl fmt::Display, context: Vec<Value>) {
        self.emit(Level::Debug, msg, context);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, msg: impl fmt::Display, context: Vec<Value>) {
        self.emit(Level::Info, msg, context);
    }

    #[track_caller]
    #[inline]
    pub fn warn(&self, msg: impl fmt::Display, context: Vec<Value>) {
        self.emit(Level::Warn, msg, context);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, msg: impl fmt::Display, context: Vec<Value>) {
        self.emit(Level::Error, msg, context);
    }

    #[track_caller]
    #[inline]
    pub fn crit(&self, msg: impl fmt::Display, context: Vec<Value>) {
        self.emit(Level::Crit, msg, context);
    }

    /// Write pre-formatted arguments at `level` with no extra context
    #[track_caller]
    #[inline]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, args, Vec::new());
    }

    #[track_caller]
    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args, Vec::new());
    }

    #[track_caller]
    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args, Vec::new());
    }

    #[track_caller]
    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, args, Vec::new());
    }

    #[track_caller]
    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args, Vec::new());
    }

    #[track_caller]
    #[inline]
    pub fn critf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Crit, args, Vec::new());
    }

    /// Write a critical record, wait [`PANIC_FLUSH_DELAY`], then panic with
    /// the message.
    #[track_caller]
    pub fn panic(&self, msg: impl fmt::Display, context: Vec<Value>) -> ! {
        let message = msg.to_string();
        self.emit(Level::Crit, &message, context);
        thread::sleep(PANIC_FLUSH_DELAY);
        panic!("{}", message);
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.emit(Level::Crit, &message, Vec::new());
        thread::sleep(PANIC_FLUSH_DELAY);
        panic!("{}", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("max_level", &self.level())
            .field("context", &self.context)
            .field("handler", &self.handler)
            .field("key_names", &self.key_names)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_kvlog::prelude::*;
///
/// let logger = Logger::builder()
///     .level(Level::Info)
///     .context(kv!["service", "billing"])
///     .handler(DiscardHandler)
///     .build();
/// assert_eq!(logger.level(), Level::Info);
/// ```
pub struct LoggerBuilder {
    level: Level,
    context: Vec<Value>,
    handler: Option<Arc<dyn Handler>>,
    key_names: RecordKeyNames,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            context: Vec::new(),
            handler: None,
            key_names: RecordKeyNames::default(),
        }
    }

    /// Set the most verbose level that is still written
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the base context; it is normalized on `build`
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: Vec<Value>) -> Self {
        self.context = context;
        self
    }

    /// Install a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Install a handler that is already shared elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Rename the time/msg/lvl fields in formatted output
    #[must_use = "builder methods return a new value"]
    pub fn key_names(mut self, key_names: RecordKeyNames) -> Self {
        self.key_names = key_names;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let handler = match self.handler {
            Some(handler) => SwapHandler::with_handler(handler),
            None => SwapHandler::new(),
        };
        Logger::from_parts(
            self.level,
            new_context(&[], self.context),
            handler,
            self.key_names,
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::{ERROR_KEY, ODD_ARGS_MESSAGE};
    use crate::core::error::LoggerError;
    use crate::core::value::Ctx;
    use crate::handlers::MemoryHandler;
    use crate::kv;

    fn capturing(level: Level) -> (Logger, Arc<MemoryHandler>) {
        let memory = Arc::new(MemoryHandler::new());
        let logger = Logger::builder()
            .level(level)
            .shared_handler(memory.clone())
            .build();
        (logger, memory)
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build();
        assert_eq!(logger.level(), Level::Debug);
        assert!(logger.context().is_empty());
        assert_eq!(logger.key_names(), &RecordKeyNames::default());
    }

    #[test]
    fn test_builder_normalizes_context() {
        let logger = Logger::builder().context(kv!["service"]).build();
        assert_eq!(logger.context().len(), 4);
    }

    #[test]
    fn test_level_gate() {
        for floor in Level::ALL {
            let (logger, memory) = capturing(floor);
            for level in Level::ALL {
                memory.clear();
                logger.log(level, "probe", kv![]).unwrap();
                assert_eq!(memory.len() == 1, level <= floor, "floor {} level {}", floor, level);
            }
        }
    }

    #[test]
    fn test_set_level_filters_and_keeps_record_level() {
        let (logger, memory) = capturing(Level::Debug);
        logger.set_level(Level::Warn);

        logger.info("ignored", kv![]);
        assert!(memory.is_empty());

        logger.error("kept", kv![]);
        let records = memory.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Error);
        assert_eq!(records[0].message, "kept");
    }

    #[test]
    fn test_write_without_handler_is_silent() {
        let logger = Logger::new(kv!["a", 1]);
        assert!(logger.log(Level::Crit, "nowhere", kv![]).is_ok());
        logger.info("still nowhere", kv!["k", "v"]);
    }

    #[test]
    fn test_record_context_is_prefix_plus_call_context() {
        let (root, memory) = capturing(Level::Debug);
        let child = root.derive(kv!["a", 1]);

        child.info("hello", kv!["b", 2]);

        let record = memory.last().unwrap();
        assert_eq!(record.context, kv!["a", 1, "b", 2]);
        assert_eq!(record.message, "hello");
    }

    #[test]
    fn test_derive_chain_with_ctx_maps() {
        let logger = Logger::new(kv![]);
        let grandchild = logger
            .derive(kv![Ctx::new().with("a", 1)])
            .derive(kv![Ctx::new().with("b", 2)]);
        assert_eq!(grandchild.context(), &kv!["a", 1, "b", 2][..]);
    }

    #[test]
    fn test_odd_context_gets_marker() {
        let (logger, memory) = capturing(Level::Debug);
        logger.warn("odd", kv!["lonely"]);

        let record = memory.last().unwrap();
        assert_eq!(record.context, kv!["lonely", Value::Nil, ERROR_KEY, ODD_ARGS_MESSAGE]);
    }

    #[test]
    fn test_derive_copies_level_independently() {
        let (parent, _memory) = capturing(Level::Info);
        let child = parent.derive(kv![]);
        assert_eq!(child.level(), Level::Info);

        parent.set_level(Level::Crit);
        assert_eq!(child.level(), Level::Info);

        child.set_level(Level::Debug);
        assert_eq!(parent.level(), Level::Crit);

        let explicit = parent.derive_with_level(Level::Warn, kv![]);
        assert_eq!(explicit.level(), Level::Warn);
    }

    #[test]
    fn test_derive_copies_handler_at_derivation() {
        let (parent, first) = capturing(Level::Debug);
        let child = parent.derive(kv!["child", true]);

        let second = Arc::new(MemoryHandler::new());
        parent.set_handler(second.clone());

        child.info("from child", kv![]);
        parent.info("from parent", kv![]);

        assert_eq!(first.len(), 1);
        assert_eq!(first.last().unwrap().message, "from child");
        assert_eq!(second.len(), 1);
        assert_eq!(second.last().unwrap().message, "from parent");
    }

    #[test]
    fn test_derive_inherits_key_names() {
        let names = RecordKeyNames {
            time: "ts".to_string(),
            msg: "message".to_string(),
            lvl: "severity".to_string(),
        };
        let memory = Arc::new(MemoryHandler::new());
        let logger = Logger::builder()
            .key_names(names.clone())
            .shared_handler(memory.clone())
            .build();

        logger.derive(kv![]).info("renamed", kv![]);
        assert_eq!(memory.last().unwrap().key_names, names);
    }

    #[test]
    fn test_formatted_variants_render_eagerly_without_context() {
        let (logger, memory) = capturing(Level::Debug);
        let logger = logger.derive(kv!["scope", "f"]);

        logger.debugf(format_args!("{} + {} = {}", 1, 2, 3));
        logger.infof(format_args!("port {}", 8080));
        logger.warnf(format_args!("w"));
        logger.errorf(format_args!("e"));
        logger.critf(format_args!("c"));

        let records = memory.records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].message, "1 + 2 = 3");
        assert_eq!(records[1].message, "port 8080");
        let levels: Vec<Level> = records.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![Level::Debug, Level::Info, Level::Warn, Level::Error, Level::Crit]
        );
        for record in &records {
            assert_eq!(record.context, kv!["scope", "f"]);
        }
    }

    #[test]
    fn test_call_site_is_user_line() {
        let (logger, memory) = capturing(Level::Debug);

        let line = line!(); logger.info("direct", kv![]);
        assert_eq!(memory.last().unwrap().call.line, line);

        let line = line!(); logger.infof(format_args!("formatted"));
        assert_eq!(memory.last().unwrap().call.line, line);

        let line = line!(); logger.log(Level::Warn, "explicit", kv![]).unwrap();
        assert_eq!(memory.last().unwrap().call.line, line);

        assert_eq!(memory.last().unwrap().call.file, file!());
    }

    #[test]
    fn test_handler_error_surfaces_only_on_explicit_path() {
        struct Broken;
        impl Handler for Broken {
            fn log(&self, _record: &Record) -> Result<()> {
                Err(LoggerError::handler_write(
                    "broken",
                    std::io::Error::new(std::io::ErrorKind::Other, "nope"),
                ))
            }
        }

        let logger = Logger::builder().handler(Broken).build();
        logger.error("swallowed", kv![]);
        assert!(matches!(
            logger.log(Level::Error, "surfaced", kv![]),
            Err(LoggerError::HandlerWrite { .. })
        ));
    }

    #[test]
    fn test_panic_writes_crit_before_unwinding() {
        let (logger, memory) = capturing(Level::Error);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panic("fatal state", kv!["code", 7]);
        }));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("fatal state"));

        let records = memory.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Crit);
        assert_eq!(records[0].context, kv!["code", 7]);
    }

    #[test]
    fn test_panicf_message() {
        let (logger, memory) = capturing(Level::Debug);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panicf(format_args!("bad input {}", 3));
        }));

        assert!(result.is_err());
        assert_eq!(memory.last().unwrap().message, "bad input 3");
        assert_eq!(memory.last().unwrap().level, Level::Crit);
    }
}
