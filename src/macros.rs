//! Logging macros for ergonomic log message formatting.
//!
//! [`kv!`](crate::kv) and [`ctx!`](crate::ctx) build context arguments. The
//! leveled macros format their message like `format!` and forward to the
//! logger's `*f` methods, so the record's call site is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use rust_kvlog::prelude::*;
//! use rust_kvlog::{ctx, info};
//!
//! let logger = Logger::new(kv!["app", "demo"]);
//!
//! // Context as alternating keys and values
//! logger.info("request served", kv!["status", 200, "path", "/health"]);
//!
//! // Context as a map
//! logger.warn("slow request", kv![ctx! { "elapsed_ms" => 1200 }]);
//!
//! // Formatted message
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! ```

/// Build a context vector, converting each element into a
/// [`Value`](crate::Value).
///
/// # Examples
///
/// ```
/// use rust_kvlog::{kv, Value};
///
/// let ctx = kv!["user", "ana", "attempts", 3];
/// assert_eq!(ctx, vec![Value::from("user"), "ana".into(), "attempts".into(), 3.into()]);
/// assert!(kv![].is_empty());
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

/// Build a [`Ctx`](crate::Ctx) map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_kvlog::{ctx, Value};
///
/// let map = ctx! { "region" => "eu", "shard" => 4 };
/// assert_eq!(map.get("shard"), Some(&Value::Int(4)));
/// ```
#[macro_export]
macro_rules! ctx {
    () => {
        $crate::Ctx::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Ctx::new();
        $(map.insert($key, $value);)+
        map
    }};
}

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_kvlog::prelude::*;
/// # let logger = Logger::new(kv![]);
/// use rust_kvlog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_kvlog::prelude::*;
/// # let logger = Logger::new(kv![]);
/// use rust_kvlog::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Log a critical message.
///
/// # Examples
///
/// ```
/// # use rust_kvlog::prelude::*;
/// # let logger = Logger::new(kv![]);
/// use rust_kvlog::crit;
/// crit!(logger, "Critical failure: {}", "disk");
/// ```
#[macro_export]
macro_rules! crit {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critf(::std::format_args!($($arg)+))
    };
}
