//! Unit tests for the Engine logging hub
//!
//! IMPORTANT: the logger is a global OnceLock shared across all tests.
//! All tests are marked with #[serial] to run sequentially.

use crate::raywalk::Engine;
use crate::raywalk::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        // Other unit tests log concurrently from their own sources.
        if entry.source != "raywalk::Test" {
            return;
        }
        let location = match (entry.file, entry.line) {
            (Some(_), Some(line)) => format!(" @{}", line),
            _ => String::new(),
        };
        self.entries
            .lock()
            .unwrap()
            .push(format!("{:?}: {}{}", entry.severity, entry.message, location));
    }
}

// ============================================================================
// LOGGING API TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_captures_entries() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, "raywalk::Test", "hello".to_string());
    Engine::log(LogSeverity::Warn, "raywalk::Test", "careful".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0], "Info: hello");
        assert_eq!(captured[1], "Warn: careful");
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log_detailed(LogSeverity::Error, "raywalk::Test", "boom".to_string(), "x.rs", 12);

    assert_eq!(entries.lock().unwrap()[0], "Error: boom @12");

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::set_min_severity(LogSeverity::Warn);

    crate::engine_trace!("raywalk::Test", "dropped {}", 1);
    crate::engine_info!("raywalk::Test", "dropped {}", 2);
    crate::engine_warn!("raywalk::Test", "kept {}", 3);
    crate::engine_error!("raywalk::Test", "kept {}", 4);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0], "Warn: kept 3");
        assert!(captured[1].starts_with("Error: kept 4 @"));
    }

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Trace);
}

#[test]
#[serial]
fn test_reset_logger_restores_default() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "raywalk::Test", "to stdout".to_string());

    assert!(entries.lock().unwrap().is_empty());
}
