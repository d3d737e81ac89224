//! # rust_kvlog
//!
//! Structured key/value logging organized as a tree of loggers.
//!
//! ## Features
//!
//! - **Contextual**: every logger carries key/value context that its
//!   children inherit
//! - **Leveled**: each logger has its own level gate, checked before a
//!   record is built
//! - **Swappable sinks**: handlers can be replaced at runtime from any thread
//! - **Lazy values**: expensive context is computed only when formatted
//! - **Terminal, logfmt and JSON output**
//!
//! ## Example
//!
//! ```
//! use rust_kvlog::prelude::*;
//! use rust_kvlog::handlers::StreamHandler;
//!
//! let logger = Logger::builder()
//!     .level(Level::Info)
//!     .handler(StreamHandler::new(std::io::sink(), OutputFormat::Logfmt))
//!     .build();
//!
//! let requests = logger.derive(kv!["component", "http"]);
//! requests.info("request served", kv!["status", 200, "path", "/"]);
//! requests.debug("dropped by the level gate", kv![]);
//! ```

pub mod config;
pub mod core;
pub mod handlers;
pub mod macros;
pub mod root;

pub mod prelude {
    pub use crate::config::{FormatChoice, LoggerConfig, OutputTarget};
    pub use crate::core::{
        CallSite, Ctx, DiscardHandler, Handler, Lazy, Level, Logger, LoggerBuilder, LoggerError,
        OutputFormat, Record, RecordKeyNames, Result, TimestampFormat, Value,
    };
    pub use crate::{ctx, kv};
}

pub use config::{FormatChoice, LoggerConfig, OutputTarget};
pub use core::{
    new_context, normalize, resolve_lazy, CallSite, Ctx, DiscardHandler, Handler, Lazy, Level,
    Logger, LoggerBuilder, LoggerError, OutputFormat, Record, RecordKeyNames, Result,
    SwapHandler, TimestampFormat, Value, ERROR_KEY, ODD_ARGS_MESSAGE, PANIC_FLUSH_DELAY,
};
pub use handlers::{stderr_handler, stdout_handler};
