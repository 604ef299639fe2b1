//! Culling log types and the `engine_*!` macros
//!
//! Entries carry a severity, a `culling::<Component>` source and, for
//! errors, the file and line that raised them. They are routed through
//! [`crate::culling::Engine`], which owns the process-wide logger slot and
//! the minimum severity filter. Without a custom logger, entries are
//! printed to stdout with coloured severity tags.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Destination for culling log entries
///
/// Implement this trait to forward culling logs elsewhere (a file, the
/// host engine's console, the `log` crate facade, ...).
///
/// # Example
///
/// ```no_run
/// use distance_culling::culling::log::{Logger, LogEntry};
///
/// struct HostConsoleLogger;
///
/// impl Logger for HostConsoleLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Called once per entry that passes the severity filter
    fn log(&self, entry: &LogEntry);
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// When the entry was emitted
    pub timestamp: SystemTime,

    /// Source component (e.g., "culling::DistanceManager")
    pub source: String,

    /// Formatted message text
    pub message: String,

    /// File that emitted the entry (`engine_error!` only)
    pub file: Option<&'static str>,

    /// Line that emitted the entry (`engine_error!` only)
    pub line: Option<u32>,
}

/// Severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogSeverity {
    /// Per-tick detail (phase timings, buffer sizes)
    Trace = 0,

    /// Registry changes and other development information
    Debug = 1,

    /// Lifecycle events worth seeing in a normal run
    Info = 2,

    /// Recoverable oddities (stale requesters, unknown unregistrations)
    Warn = 3,

    /// Failed lookups and rejected configuration, with file:line details
    Error = 4,
}

impl LogSeverity {
    /// Fixed-width label used by the default console output
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }

    /// Inverse of `severity as u8`; out-of-range values clamp to Error
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

/// Console logger installed until the host sets its own
///
/// Prints `[timestamp] [SEVERITY] [source] message`, with ` (file:line)`
/// appended when the entry carries a location. Severity tags are coloured
/// from grey (Trace) to bold red (Error).
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry as a single console line
    pub fn format(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let tag = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let source = entry.source.bright_blue();

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, tag, source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, tag, source, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        println!("{}", Self::format(entry));
    }
}

// ===== LOGGING MACROS =====
//
// Each macro checks the severity filter before formatting, so disabled
// per-tick messages cost one atomic load.

/// Log a TRACE message (per-tick detail)
///
/// # Example
///
/// ```ignore
/// engine_trace!("culling::DistanceManager", "tick {} collected {} requests", tick, count);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Engine::is_enabled($crate::culling::log::LogSeverity::Trace) {
            $crate::culling::Engine::log(
                $crate::culling::log::LogSeverity::Trace,
                $source,
                format!($($arg)*),
            );
        }
    };
}

/// Log a DEBUG message (registry changes, configuration)
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Engine::is_enabled($crate::culling::log::LogSeverity::Debug) {
            $crate::culling::Engine::log(
                $crate::culling::log::LogSeverity::Debug,
                $source,
                format!($($arg)*),
            );
        }
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Engine::is_enabled($crate::culling::log::LogSeverity::Info) {
            $crate::culling::Engine::log(
                $crate::culling::log::LogSeverity::Info,
                $source,
                format!($($arg)*),
            );
        }
    };
}

/// Log a WARN message (recoverable oddities)
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Engine::is_enabled($crate::culling::log::LogSeverity::Warn) {
            $crate::culling::Engine::log(
                $crate::culling::log::LogSeverity::Warn,
                $source,
                format!($($arg)*),
            );
        }
    };
}

/// Log an ERROR message, tagged with the calling file and line
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::culling::Engine::is_enabled($crate::culling::log::LogSeverity::Error) {
            $crate::culling::Engine::log_detailed(
                $crate::culling::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!(),
            );
        }
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
