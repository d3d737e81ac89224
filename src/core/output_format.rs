//! Output formats for records
//!
//! Provides the encodings handlers write:
//! - Terminal: human-readable, colored when the `console` feature is enabled
//! - Logfmt: `key=value` pairs for machines and log aggregation tools
//! - Json: one object per line
//!
//! Formatting is also where [`Lazy`](super::lazy::Lazy) context values are
//! evaluated; see [`resolve_lazy`].

use super::context::ERROR_KEY;
use super::record::Record;
use super::timestamp::TimestampFormat;
use super::value::Value;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Write;

/// Messages shorter than this are padded in terminal output so that
/// context columns line up.
const TERMINAL_MSG_JUSTIFY: usize = 40;

/// Appended under `ERROR_KEY` when a lazy value fails to evaluate.
const BAD_LAZY_MESSAGE: &str = "bad lazy";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format for interactive terminals
    ///
    /// Example: `INFO[01-08|10:30:45] request served                           path=/ status=200`
    Terminal,

    /// Logfmt format (key=value pairs, default)
    ///
    /// Example: `t=2025-01-08T10:30:45+0000 lvl=info msg="request served" path=/ status=200`
    #[default]
    Logfmt,

    /// JSON format for machine processing
    ///
    /// Example: `{"lvl":"info","msg":"request served","path":"/","status":200,"t":"2025-01-08T10:30:45+00:00"}`
    Json,
}

impl OutputFormat {
    /// Terminal output for interactive destinations, logfmt otherwise
    pub fn for_destination(is_terminal: bool) -> Self {
        if is_terminal {
            OutputFormat::Terminal
        } else {
            OutputFormat::Logfmt
        }
    }

    /// The timestamp layout this format uses unless told otherwise
    pub fn default_timestamp(&self) -> TimestampFormat {
        match self {
            OutputFormat::Terminal => TimestampFormat::Terminal,
            OutputFormat::Logfmt => TimestampFormat::Logfmt,
            OutputFormat::Json => TimestampFormat::Rfc3339,
        }
    }

    /// Render a record as one newline-terminated line
    pub fn format(&self, record: &Record, timestamp_format: &TimestampFormat) -> String {
        let context = resolve_lazy(&record.context);
        match self {
            OutputFormat::Terminal => format_terminal(record, &context, timestamp_format),
            OutputFormat::Logfmt => format_logfmt(record, &context, timestamp_format),
            OutputFormat::Json => format_json(record, &context, timestamp_format),
        }
    }
}

/// Evaluate every lazy value in a context sequence.
///
/// Only value positions are inspected. A failed evaluation replaces the value
/// with its error text and appends `(ERROR_KEY, "bad lazy")`. Contexts without
/// lazy values are returned borrowed.
pub fn resolve_lazy(context: &[Value]) -> Cow<'_, [Value]> {
    let has_lazy = context
        .iter()
        .skip(1)
        .step_by(2)
        .any(|v| matches!(v, Value::Lazy(_)));
    if !has_lazy {
        return Cow::Borrowed(context);
    }

    let mut resolved = context.to_vec();
    let mut had_error = false;
    for value in resolved.iter_mut().skip(1).step_by(2) {
        if let Value::Lazy(lazy) = value {
            *value = match lazy.evaluate() {
                Ok(v) => v,
                Err(e) => {
                    had_error = true;
                    Value::Str(e)
                }
            };
        }
    }
    if had_error {
        resolved.push(Value::from(ERROR_KEY));
        resolved.push(Value::from(BAD_LAZY_MESSAGE));
    }
    Cow::Owned(resolved)
}

fn format_terminal(record: &Record, context: &[Value], timestamp_format: &TimestampFormat) -> String {
    let level = record.level.to_str().to_uppercase();
    let time = timestamp_format.format(&record.time);
    let mut out = String::with_capacity(64 + record.message.len());

    #[cfg(feature = "console")]
    {
        use colored::Colorize;
        let _ = write!(out, "{}[{}] {} ", level.color(record.level.color()), time, record.message);
    }
    #[cfg(not(feature = "console"))]
    {
        let _ = write!(out, "[{}] [{}] {} ", level, time, record.message);
    }

    let msg_width = record.message.chars().count();
    if !context.is_empty() && msg_width < TERMINAL_MSG_JUSTIFY {
        out.extend(std::iter::repeat(' ').take(TERMINAL_MSG_JUSTIFY - msg_width));
    }

    for (i, pair) in context.chunks_exact(2).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let key = logfmt_key(&pair[0]);
        let value = logfmt_value(&pair[1]);
        #[cfg(feature = "console")]
        {
            use colored::Colorize;
            let _ = write!(out, "{}={}", key.color(record.level.color()), value);
        }
        #[cfg(not(feature = "console"))]
        {
            let _ = write!(out, "{}={}", key, value);
        }
    }
    out.push('\n');
    out
}

fn format_logfmt(record: &Record, context: &[Value], timestamp_format: &TimestampFormat) -> String {
    let names = &record.key_names;
    let mut parts = Vec::with_capacity(3 + context.len() / 2);

    parts.push(format!(
        "{}={}",
        escape_logfmt(&names.time),
        escape_logfmt(&timestamp_format.format(&record.time))
    ));
    parts.push(format!("{}={}", escape_logfmt(&names.lvl), record.level.to_str()));
    parts.push(format!(
        "{}={}",
        escape_logfmt(&names.msg),
        escape_logfmt(&record.message)
    ));

    for pair in context.chunks_exact(2) {
        parts.push(format!("{}={}", logfmt_key(&pair[0]), logfmt_value(&pair[1])));
    }

    let mut line = parts.join(" ");
    line.push('\n');
    line
}

fn format_json(record: &Record, context: &[Value], timestamp_format: &TimestampFormat) -> String {
    let names = &record.key_names;
    let mut json_obj = serde_json::Map::new();

    let time = if timestamp_format.is_numeric() {
        serde_json::Value::Number(record.time.timestamp_millis().into())
    } else {
        serde_json::Value::String(timestamp_format.format(&record.time))
    };
    json_obj.insert(names.time.clone(), time);
    json_obj.insert(
        names.lvl.clone(),
        serde_json::Value::String(record.level.to_str().to_string()),
    );
    json_obj.insert(
        names.msg.clone(),
        serde_json::Value::String(record.message.clone()),
    );

    for pair in context.chunks_exact(2) {
        match &pair[0] {
            Value::Str(key) => {
                json_obj.insert(key.clone(), pair[1].to_json_value());
            }
            other => {
                json_obj.insert(
                    ERROR_KEY.to_string(),
                    serde_json::Value::String(format!("{} is not a string key", other)),
                );
            }
        }
    }

    let mut line = serde_json::Value::Object(json_obj).to_string();
    line.push('\n');
    line
}

fn logfmt_key(key: &Value) -> String {
    match key {
        Value::Str(s) => escape_logfmt(s),
        other => escape_logfmt(&other.to_string()),
    }
}

fn logfmt_value(value: &Value) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Uint(u) => u.to_string(),
        Value::Float(f) => format!("{:.3}", f),
        Value::Time(t) => TimestampFormat::Logfmt.format(t),
        Value::Str(s) => escape_logfmt(s),
        other => escape_logfmt(&other.to_string()),
    }
}

/// Quote a value if it contains whitespace, `=`, `"` or control
/// characters, escaping backslashes, quotes and line breaks.
fn escape_logfmt(value: &str) -> String {
    let needs_quotes = value.chars().any(|c| c <= ' ' || c == '=' || c == '"');
    let needs_escape = value
        .chars()
        .any(|c| matches!(c, '\\' | '"' | '\n' | '\r' | '\t'));
    if !needs_quotes && !needs_escape {
        return value.to_string();
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    if needs_quotes {
        escaped.push('"');
    }
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    if needs_quotes {
        escaped.push('"');
    }
    escaped
}
