//! Handler implementations

pub mod func;
pub mod memory;
pub mod stream;

pub use func::FuncHandler;
pub use memory::MemoryHandler;
pub use stream::StreamHandler;

// Re-export traits for convenience
pub use crate::core::{DiscardHandler, Handler};

use crate::core::OutputFormat;
use std::io::{self, IsTerminal};

/// Handler writing to standard output.
///
/// Uses the terminal format when stdout is an interactive terminal and
/// logfmt otherwise.
pub fn stdout_handler() -> StreamHandler<io::Stdout> {
    let format = OutputFormat::for_destination(io::stdout().is_terminal());
    StreamHandler::new(io::stdout(), format).with_name("stdout")
}

/// Handler writing to standard error, formatted like [`stdout_handler`].
pub fn stderr_handler() -> StreamHandler<io::Stderr> {
    let format = OutputFormat::for_destination(io::stderr().is_terminal());
    StreamHandler::new(io::stderr(), format).with_name("stderr")
}
