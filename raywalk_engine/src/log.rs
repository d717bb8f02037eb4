//! Internal logging system for the Raywalk engine
//!
//! - Customizable sink via the `Logger` trait
//! - Severity levels (Trace, Debug, Info, Warn, Error) with a global minimum
//! - Colored console output by default
//! - File and line information for ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route engine logs elsewhere (an in-app console,
/// a file, a test capture buffer).
///
/// # Example
///
/// ```no_run
/// use raywalk_engine::raywalk::log::{Logger, LogEntry};
///
/// struct ConsolePanel;
///
/// impl Logger for ConsolePanel {
///     fn log(&self, entry: &LogEntry) {
///         // Append entry.plain_line() to an overlay...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "raywalk::Camera", "raywalk::Frontier")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

impl LogEntry {
    /// Timestamp formatted as `YYYY-MM-DD HH:MM:SS.mmm` in local time.
    pub fn formatted_timestamp(&self) -> String {
        let datetime: DateTime<Local> = self.timestamp.into();
        datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }

    /// Uncolored single-line rendering of the entry.
    ///
    /// `[timestamp] [SEVERITY] [source] message (file:line)`
    pub fn plain_line(&self) -> String {
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            self.formatted_timestamp(),
            self.severity.label(),
            self.source,
            self.message
        );
        if let (Some(file), Some(number)) = (self.file, self.line) {
            line.push_str(&format!(" ({}:{})", file, number));
        }
        line
    }
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-step traversal detail
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Colors: Trace bright black, Debug cyan, Info green, Warn yellow,
/// Error bold red. Source names are bright blue.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                entry.formatted_timestamp(),
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                entry.formatted_timestamp(),
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```no_run
/// # use raywalk_engine::engine_trace;
/// # let count = 0;
/// engine_trace!("raywalk::Frontier", "Descending {} nodes", count);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::raywalk::Engine::log(
            $crate::raywalk::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// ```no_run
/// # use raywalk_engine::engine_debug;
/// # let (w, h) = (0, 0);
/// engine_debug!("raywalk::Camera", "Resized to {}x{}", w, h);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::raywalk::Engine::log(
            $crate::raywalk::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// ```no_run
/// # use raywalk_engine::engine_info;
/// engine_info!("raywalk::Viewer", "Index bound");
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::raywalk::Engine::log(
            $crate::raywalk::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// ```no_run
/// # use raywalk_engine::engine_warn;
/// engine_warn!("raywalk::IntersectionHandler", "Point count mismatch");
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::raywalk::Engine::log(
            $crate::raywalk::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```no_run
/// # use raywalk_engine::engine_error;
/// # let key = 0;
/// engine_error!("raywalk::TriangleTree", "Unknown child {:?}", key);
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::raywalk::Engine::log_detailed(
            $crate::raywalk::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
