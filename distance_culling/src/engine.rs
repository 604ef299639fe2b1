/// Engine - process-wide logging facade for the culling subsystem
///
/// The distance manager, reference point and transform providers are all
/// constructed and passed explicitly by the host. The only process-wide
/// state is the logger slot, so that the `engine_*!` macros can be used from
/// anywhere in the crate without threading a logger through every call.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Active logger, created as DefaultLogger on first use
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Trace as u8);

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Logging facade
///
/// # Example
///
/// ```no_run
/// use distance_culling::culling::Engine;
/// use distance_culling::culling::log::LogSeverity;
///
/// // Silence per-tick trace output in a release build
/// Engine::set_min_severity(LogSeverity::Info);
/// ```
pub struct Engine;

impl Engine {
    /// Route every culling log entry to `logger`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use distance_culling::culling::{Engine, log::{Logger, LogEntry, LogSeverity}};
    ///
    /// /// Keeps only warnings and errors
    /// struct QuietLogger;
    /// impl Logger for QuietLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         if entry.severity >= LogSeverity::Warn {
    ///             eprintln!("[{}] {}", entry.source, entry.message);
    ///         }
    ///     }
    /// }
    ///
    /// Engine::set_logger(QuietLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger) and the filter to Trace
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(DefaultLogger);
        }
        MIN_SEVERITY.store(LogSeverity::Trace as u8, Ordering::Relaxed);
    }

    /// Drop every entry below `severity`
    pub fn set_min_severity(severity: LogSeverity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    /// Current minimum severity
    pub fn min_severity() -> LogSeverity {
        LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Whether an entry of `severity` would reach the logger
    ///
    /// Lets hot paths skip building messages nobody will see.
    pub fn is_enabled(severity: LogSeverity) -> bool {
        severity >= Self::min_severity()
    }

    /// Emit an entry without a code location
    ///
    /// Backs `engine_trace!` through `engine_warn!`. `source` names the
    /// emitting component, e.g. "culling::DistanceManager".
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Emit an entry tagged with the file and line that raised it
    ///
    /// Backs `engine_error!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
