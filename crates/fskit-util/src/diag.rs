//! Internal diagnostics setup using tracing.
//!
//! This configures the `tracing` output used by the fskit crates themselves
//! (storage writes, watcher events). It is independent of the console
//! [`Logger`](crate::log::Logger), which is part of the public product
//! surface.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Diagnostic level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl DiagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagLevel::Trace => "trace",
            DiagLevel::Debug => "debug",
            DiagLevel::Info => "info",
            DiagLevel::Warn => "warn",
            DiagLevel::Error => "error",
        }
    }

    /// Parse a diagnostic level from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(DiagLevel::Trace),
            "debug" => Some(DiagLevel::Debug),
            "info" => Some(DiagLevel::Info),
            "warn" => Some(DiagLevel::Warn),
            "error" => Some(DiagLevel::Error),
            _ => None,
        }
    }
}

/// Diagnostics configuration.
pub struct DiagConfig {
    /// Whether to print diagnostics to stderr.
    pub print: bool,
    /// Diagnostic level.
    pub level: DiagLevel,
    /// Whether to include file/line info.
    pub include_location: bool,
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self {
            print: false,
            level: DiagLevel::Info,
            include_location: false,
        }
    }
}

/// Initialize diagnostics with the given configuration.
///
/// This should be called once at application startup.
pub fn init(config: DiagConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.print {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        subscriber.with(fmt_layer).init();
    } else {
        // Spans still work even when nothing is printed
        subscriber.init();
    }
}
