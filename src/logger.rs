//! Logging collaborator resolved through the locator.
//!
//! The registry never depends on a concrete logging back end. It looks up a
//! `dyn Logger` the same way any other service is looked up, and stays
//! silent when none is registered. [`DefaultLogger`] forwards to `tracing`
//! and is what [`EnableLogger::logger`] installs when the application has
//! not registered its own.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Severity of a log message, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Very detailed tracing output
    Verbose,
    /// Developer diagnostics
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected that does not stop the operation
    Warn,
    /// An operation failed
    Error,
    /// The application cannot continue
    Fatal,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        };
        f.write_str(name)
    }
}

/// Logging interface consumed by the registry and by [`EnableLogger`] types.
///
/// Only [`log`](Self::log) is required; the per-level methods forward to it.
///
/// # Examples
///
/// ```
/// use service_locator::{LogLevel, Logger};
/// use std::error::Error;
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Capture(Mutex<Vec<String>>);
///
/// impl Logger for Capture {
///     fn log(
///         &self,
///         level: LogLevel,
///         tag: &str,
///         message: &str,
///         _cause: Option<&(dyn Error + 'static)>,
///     ) {
///         self.0.lock().unwrap().push(format!("[{}][{}] {}", level, tag, message));
///     }
/// }
///
/// let logger = Capture::default();
/// logger.warn("Cache", "evicting");
/// assert_eq!(logger.0.lock().unwrap()[0], "[WARN][Cache] evicting");
/// ```
pub trait Logger: Send + Sync {
    /// Records one message.
    fn log(&self, level: LogLevel, tag: &str, message: &str, cause: Option<&(dyn Error + 'static)>);

    /// Logs at [`LogLevel::Verbose`].
    fn verbose(&self, tag: &str, message: &str) {
        self.log(LogLevel::Verbose, tag, message, None)
    }

    /// Logs at [`LogLevel::Debug`].
    fn debug(&self, tag: &str, message: &str) {
        self.log(LogLevel::Debug, tag, message, None)
    }

    /// Logs at [`LogLevel::Info`].
    fn info(&self, tag: &str, message: &str) {
        self.log(LogLevel::Info, tag, message, None)
    }

    /// Logs at [`LogLevel::Warn`].
    fn warn(&self, tag: &str, message: &str) {
        self.log(LogLevel::Warn, tag, message, None)
    }

    /// Logs at [`LogLevel::Error`].
    fn error(&self, tag: &str, message: &str) {
        self.log(LogLevel::Error, tag, message, None)
    }

    /// Logs at [`LogLevel::Fatal`].
    fn fatal(&self, tag: &str, message: &str) {
        self.log(LogLevel::Fatal, tag, message, None)
    }

    /// Logs at [`LogLevel::Warn`] with the error that caused it.
    fn warn_with_cause(&self, tag: &str, message: &str, cause: &(dyn Error + 'static)) {
        self.log(LogLevel::Warn, tag, message, Some(cause))
    }

    /// Logs at [`LogLevel::Error`] with the error that caused it.
    fn error_with_cause(&self, tag: &str, message: &str, cause: &(dyn Error + 'static)) {
        self.log(LogLevel::Error, tag, message, Some(cause))
    }

    /// Logs at [`LogLevel::Fatal`] with the error that caused it.
    fn fatal_with_cause(&self, tag: &str, message: &str, cause: &(dyn Error + 'static)) {
        self.log(LogLevel::Fatal, tag, message, Some(cause))
    }
}

/// Logger that emits `tracing` events.
///
/// The tag and cause become structured fields. `Verbose` maps to `TRACE`,
/// and `Fatal` is an `ERROR` event carrying `fatal = true`. Messages below
/// the configured minimum level are dropped before reaching `tracing`.
///
/// # Examples
///
/// ```
/// use service_locator::{DefaultLogger, LogLevel, Logger};
///
/// let logger = DefaultLogger::with_min_level(LogLevel::Warn);
/// assert!(!logger.enabled(LogLevel::Info));
/// logger.warn("Startup", "config file missing, using defaults");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    min_level: LogLevel,
}

impl DefaultLogger {
    /// Creates a logger that forwards every level.
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Verbose,
        }
    }

    /// Creates a logger that drops messages below `min_level`.
    pub fn with_min_level(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    /// True when messages at `level` are forwarded.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DefaultLogger {
    fn log(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let cause = cause.map(|e| e.to_string());
        let cause = cause.as_deref();
        match level {
            LogLevel::Verbose => tracing::trace!(tag, cause, "{}", message),
            LogLevel::Debug => tracing::debug!(tag, cause, "{}", message),
            LogLevel::Info => tracing::info!(tag, cause, "{}", message),
            LogLevel::Warn => tracing::warn!(tag, cause, "{}", message),
            LogLevel::Error => tracing::error!(tag, cause, "{}", message),
            LogLevel::Fatal => tracing::error!(tag, cause, fatal = true, "{}", message),
        }
    }
}

/// Mixin for types that log through the locator's logger.
///
/// The tag defaults to the implementing type's name.
///
/// # Examples
///
/// ```
/// use service_locator::{EnableLogger, LogLevel};
///
/// struct Worker;
/// impl EnableLogger for Worker {}
///
/// Worker.log_event(LogLevel::Info, "started");
/// assert!(Worker.log_tag().ends_with("Worker"));
/// ```
pub trait EnableLogger {
    /// Tag attached to every message from this type.
    fn log_tag(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The logger registered in the global container.
    ///
    /// Installs a [`DefaultLogger`] when none is registered, so this never
    /// fails.
    fn logger(&self) -> Arc<dyn Logger> {
        crate::locator::logger()
    }

    /// Logs `message` at `level` under [`log_tag`](Self::log_tag).
    fn log_event(&self, level: LogLevel, message: &str) {
        self.logger().log(level, self.log_tag(), message, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Verbose < LogLevel::Debug);
        assert!(LogLevel::Error < LogLevel::Fatal);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }

    #[test]
    fn min_level_filters() {
        let logger = DefaultLogger::with_min_level(LogLevel::Error);
        assert!(!logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
        assert!(logger.enabled(LogLevel::Fatal));
        assert!(DefaultLogger::new().enabled(LogLevel::Verbose));
    }
}
