//! Leveled console logger returning structured records.
//!
//! Each call writes exactly one ANSI-colored line to stdout and returns a
//! [`LogRecord`] describing what was logged. A `Logger` instance owns its
//! configuration; independently configured instances can coexist. Lines
//! tagged with their origin use an explicit scope supplied at construction
//! ([`Logger::named`] / [`Logger::scoped`]) rather than any runtime stack
//! inspection.
//!
//! Logging never fails: stdout write errors are ignored.

use std::io::Write;

use serde::{Serialize, Serializer};

use crate::term;
use crate::time::{self, Zone};

/// Log severity, or a caller-supplied custom tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warn,
    Error,
    Info,
    Success,
    Custom(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Debug => "DEBUG",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Custom(tag) => tag.as_str(),
        }
    }
}

/// A single logged argument.
///
/// Text renders as-is, JSON values render compact, and failures render as
/// their display text.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Text(String),
    Json(serde_json::Value),
    Failure(String),
}

impl LogValue {
    /// Capture an error's display text.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        LogValue::Failure(err.to_string())
    }

    fn render(&self) -> String {
        match self {
            LogValue::Text(text) => text.clone(),
            LogValue::Json(value) => value.to_string(),
            LogValue::Failure(message) => message.clone(),
        }
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(v: serde_json::Value) -> Self {
        LogValue::Json(v)
    }
}

impl From<i64> for LogValue {
    fn from(n: i64) -> Self {
        LogValue::Json(serde_json::Value::from(n))
    }
}

impl From<u64> for LogValue {
    fn from(n: u64) -> Self {
        LogValue::Json(serde_json::Value::from(n))
    }
}

impl From<f64> for LogValue {
    fn from(n: f64) -> Self {
        LogValue::Json(serde_json::Value::from(n))
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Json(serde_json::Value::from(b))
    }
}

impl Serialize for LogValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LogValue::Text(text) => serializer.serialize_str(text),
            LogValue::Json(value) => value.serialize(serializer),
            LogValue::Failure(message) => serializer.serialize_str(message),
        }
    }
}

/// The message of a log call, preserving the original argument shape:
/// a single value stays scalar, multiple values stay an ordered sequence,
/// and no arguments serialize as an empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LogMessage {
    #[default]
    Empty,
    One(LogValue),
    Many(Vec<LogValue>),
}

impl LogMessage {
    fn render(&self) -> String {
        match self {
            LogMessage::Empty => String::new(),
            LogMessage::One(value) => value.render(),
            LogMessage::Many(values) => values
                .iter()
                .map(LogValue::render)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl Serialize for LogMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LogMessage::Empty => serializer.serialize_str(""),
            LogMessage::One(value) => value.serialize(serializer),
            LogMessage::Many(values) => values.serialize(serializer),
        }
    }
}

impl From<()> for LogMessage {
    fn from(_: ()) -> Self {
        LogMessage::Empty
    }
}

impl From<LogValue> for LogMessage {
    fn from(v: LogValue) -> Self {
        LogMessage::One(v)
    }
}

impl From<&str> for LogMessage {
    fn from(s: &str) -> Self {
        LogMessage::One(s.into())
    }
}

impl From<String> for LogMessage {
    fn from(s: String) -> Self {
        LogMessage::One(s.into())
    }
}

impl From<serde_json::Value> for LogMessage {
    fn from(v: serde_json::Value) -> Self {
        LogMessage::One(v.into())
    }
}

impl<T: Into<LogValue>> From<Vec<T>> for LogMessage {
    fn from(values: Vec<T>) -> Self {
        LogMessage::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<LogValue>, B: Into<LogValue>> From<(A, B)> for LogMessage {
    fn from((a, b): (A, B)) -> Self {
        LogMessage::Many(vec![a.into(), b.into()])
    }
}

impl<A: Into<LogValue>, B: Into<LogValue>, C: Into<LogValue>> From<(A, B, C)> for LogMessage {
    fn from((a, b, c): (A, B, C)) -> Self {
        LogMessage::Many(vec![a.into(), b.into(), c.into()])
    }
}

impl<A: Into<LogValue>, B: Into<LogValue>, C: Into<LogValue>, D: Into<LogValue>>
    From<(A, B, C, D)> for LogMessage
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        LogMessage::Many(vec![a.into(), b.into(), c.into(), d.into()])
    }
}

/// The structured result of a log call. The console line is a side effect;
/// the record is returned to the caller, who may ignore it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// `""`, or `"fn: <scope>"` when the line was tagged with its origin.
    pub caller_tag: String,
    /// Log-shape timestamp (`DD/MM/YYYY:HH:MM:SS`) in the logger's zone.
    pub timestamp: String,
    pub message: LogMessage,
    pub level: String,
}

/// Configuration for a [`Logger`] instance.
#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    /// Origin tag for this logger's call sites.
    pub scope: Option<String>,
    /// Whether plain calls include the scope tag.
    pub show_scope: bool,
    /// Display timezone for timestamps.
    pub zone: Zone,
}

/// A console logger instance.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    scope: Option<String>,
    show_scope: bool,
    always_tag: bool,
    zone: Zone,
}

impl Logger {
    /// A plain logger: local timezone, no origin tagging.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            scope: config.scope,
            show_scope: config.show_scope,
            always_tag: false,
            zone: config.zone,
        }
    }

    /// A logger bound to an origin scope; every line it emits is tagged,
    /// regardless of `show_scope`.
    pub fn named(scope: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            show_scope: false,
            always_tag: true,
            zone: Zone::default(),
        }
    }

    /// Derive a bound logger from this one, keeping its timezone.
    pub fn scoped(&self, scope: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            show_scope: self.show_scope,
            always_tag: true,
            zone: self.zone,
        }
    }

    pub fn debug<M: Into<LogMessage>>(&self, message: M) -> LogRecord {
        self.emit(Level::Debug, term::FG_MAGENTA, message.into())
    }

    pub fn warn<M: Into<LogMessage>>(&self, message: M) -> LogRecord {
        self.emit(Level::Warn, term::BG_BRIGHT_YELLOW, message.into())
    }

    pub fn error<M: Into<LogMessage>>(&self, message: M) -> LogRecord {
        self.emit(Level::Error, term::FG_RED, message.into())
    }

    pub fn info<M: Into<LogMessage>>(&self, message: M) -> LogRecord {
        self.emit(Level::Info, term::FG_BLUE, message.into())
    }

    pub fn success<M: Into<LogMessage>>(&self, message: M) -> LogRecord {
        self.emit(Level::Success, term::FG_GREEN, message.into())
    }

    /// Log under a caller-supplied tag with an optional palette color name
    /// (default cyan).
    pub fn custom<M: Into<LogMessage>>(
        &self,
        tag: impl Into<String>,
        color: Option<&str>,
        message: M,
    ) -> LogRecord {
        let color = color
            .and_then(term::fg_by_name)
            .unwrap_or(term::FG_CYAN);
        self.emit(Level::Custom(tag.into()), color, message.into())
    }

    fn caller_tag(&self) -> String {
        match (&self.scope, self.always_tag, self.show_scope) {
            (Some(scope), true, _) | (Some(scope), _, true) if !scope.is_empty() => {
                format!("fn: {}", scope)
            }
            (_, true, _) => "fn: <anonymous>".to_string(),
            _ => String::new(),
        }
    }

    fn emit(&self, level: Level, color: &str, message: LogMessage) -> LogRecord {
        let timestamp = time::log_stamp(&time::now_in(&self.zone));
        let caller_tag = self.caller_tag();

        let mut line = format!(
            "{}[{}]{} [{}]",
            color,
            level.as_str(),
            term::RESET,
            timestamp
        );
        if !caller_tag.is_empty() {
            line.push_str(&format!(" [{}]", caller_tag));
        }
        let rendered = message.render();
        if !rendered.is_empty() {
            line.push(' ');
            line.push_str(&rendered);
        }
        let _ = writeln!(std::io::stdout(), "{}", line);

        LogRecord {
            caller_tag,
            timestamp,
            message,
            level: level.as_str().to_string(),
        }
    }
}
