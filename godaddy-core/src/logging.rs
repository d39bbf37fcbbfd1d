//! Structured logging setup.
//!
//! The client only emits `tracing` events; nothing is printed unless the
//! application installs a subscriber. This module offers a ready-made one:
//! pretty, compact or JSON output, filtered by `RUST_LOG` when set and by
//! [`LogConfig::level`] otherwise.

use std::fmt;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self as tracing_fmt, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Per-token rate limiter decisions.
    Trace,
    /// Every request, response and body preview.
    Debug,
    /// Client construction and validation.
    Info,
    /// Throttling, quota and configuration warnings.
    Warn,
    /// Failed requests.
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        })
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-readable.
    Pretty,
    /// One line per event.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

/// Subscriber settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is unset
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Prefix events with a timestamp
    pub show_time: bool,
    /// Include the emitting thread id
    pub show_thread_ids: bool,
    /// Include the event target (module path)
    pub show_target: bool,
    /// Emit span enter/close events
    pub show_span_events: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            show_time: true,
            show_thread_ids: false,
            show_target: true,
            show_span_events: false,
        }
    }
}

impl LogConfig {
    /// Debug level with span events, for local work.
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            show_span_events: true,
            ..Self::default()
        }
    }

    /// JSON at info level with thread ids.
    pub fn production() -> Self {
        Self {
            format: LogFormat::Json,
            show_thread_ids: true,
            ..Self::default()
        }
    }

    /// Quiet compact output for test runs.
    pub fn test() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            show_time: false,
            show_target: false,
            ..Self::default()
        }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> String {
        format!("godaddy_core={0},godaddy_rs={0}", self.level)
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn build_layer(config: &LogConfig) -> BoxedLayer {
    let span_events = if config.show_span_events {
        FmtSpan::ENTER | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let base = tracing_fmt::layer()
        .with_thread_ids(config.show_thread_ids)
        .with_target(config.show_target)
        .with_span_events(span_events);

    let layer: BoxedLayer = match (config.format, config.show_time) {
        (LogFormat::Pretty, true) => base.pretty().boxed(),
        (LogFormat::Pretty, false) => base.pretty().without_time().boxed(),
        (LogFormat::Compact, true) => base.compact().boxed(),
        (LogFormat::Compact, false) => base.compact().without_time().boxed(),
        (LogFormat::Json, true) => base.json().boxed(),
        (LogFormat::Json, false) => base.json().without_time().boxed(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));
    layer.with_filter(filter).boxed()
}

/// Installs the global subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already set; see [`try_init_logging`].
///
/// # Examples
///
/// ```no_run
/// use godaddy_core::logging::{init_logging, LogConfig};
///
/// init_logging(&LogConfig::production());
/// ```
pub fn init_logging(config: &LogConfig) {
    tracing_subscriber::registry()
        .with(build_layer(config))
        .init();
}

/// Installs the global subscriber unless one is already set.
///
/// Returns `true` if this call installed it.
pub fn try_init_logging(config: &LogConfig) -> bool {
    tracing_subscriber::registry()
        .with(build_layer(config))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Debug.to_string(), "debug");
        assert_eq!(LogLevel::Info.to_string(), "info");
    }

    #[test]
    fn test_presets() {
        let dev = LogConfig::development();
        assert_eq!(dev.level, LogLevel::Debug);
        assert!(dev.show_span_events);

        let prod = LogConfig::production();
        assert_eq!(prod.format, LogFormat::Json);
        assert_eq!(prod.level, LogLevel::Info);
        assert!(prod.show_thread_ids);

        let test = LogConfig::test();
        assert_eq!(test.format, LogFormat::Compact);
        assert!(!test.show_time);
    }

    #[test]
    fn test_default_directive_covers_both_crates() {
        let directive = LogConfig::test().default_directive();
        assert_eq!(directive, "godaddy_core=warn,godaddy_rs=warn");
        assert!(directive.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_try_init_logging_twice() {
        try_init_logging(&LogConfig::test());
        assert!(!try_init_logging(&LogConfig::test()));
    }
}
