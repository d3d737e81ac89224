//! Core logger types and traits

pub mod context;
pub mod error;
pub mod handler;
pub mod lazy;
pub mod level;
pub mod logger;
pub mod output_format;
pub mod record;
pub mod swap_handler;
pub mod timestamp;
pub mod value;

pub use context::{new_context, normalize, ERROR_KEY, ODD_ARGS_MESSAGE};
pub use error::{LoggerError, Result};
pub use handler::{DiscardHandler, Handler};
pub use lazy::Lazy;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, PANIC_FLUSH_DELAY};
pub use output_format::{resolve_lazy, OutputFormat};
pub use record::{CallSite, Record, RecordKeyNames};
pub use swap_handler::SwapHandler;
pub use timestamp::TimestampFormat;
pub use value::{Ctx, Value};
