//! Key/value context normalization
//!
//! Callers hand a logger either alternating key/value cells or a single
//! [`Ctx`](super::value::Ctx). Both are flattened into an even-length sequence.
//! Logging calls never fail on malformed input: an odd-length sequence is
//! padded with `nil` and a visible marker pair instead.

use super::value::Value;

/// Reserved key marking context the logger had to repair.
pub const ERROR_KEY: &str = "LOG15_ERROR";

/// Diagnostic attached when an odd number of context cells was supplied.
pub const ODD_ARGS_MESSAGE: &str = "Normalized odd number of arguments by adding nil";

/// Flatten caller-supplied context into alternating key/value cells.
pub fn normalize(mut ctx: Vec<Value>) -> Vec<Value> {
    if ctx.len() == 1 && matches!(ctx[0], Value::Ctx(_)) {
        if let Some(Value::Ctx(map)) = ctx.pop() {
            ctx = map.into_flat();
        }
    }

    if ctx.len() % 2 != 0 {
        ctx.reserve(3);
        ctx.push(Value::Nil);
        ctx.push(Value::from(ERROR_KEY));
        ctx.push(Value::from(ODD_ARGS_MESSAGE));
    }

    ctx
}

/// `prefix ++ normalize(suffix)` in one allocation.
pub fn new_context(prefix: &[Value], suffix: Vec<Value>) -> Vec<Value> {
    let suffix = normalize(suffix);
    if prefix.is_empty() {
        return suffix;
    }
    let mut ctx = Vec::with_capacity(prefix.len() + suffix.len());
    ctx.extend_from_slice(prefix);
    ctx.extend(suffix);
    ctx
}
