//! Integration tests for the logging system
//!
//! These tests verify the logger slot, the severity filter, and what the
//! distance manager reports through them.
//!
//! Run with: cargo test --test logging_integration_tests

use distance_culling::culling::Engine;
use distance_culling::culling::ManagerConfig;
use distance_culling::culling::batch::{DistanceManager, FrameContext};
use distance_culling::culling::log::{Logger, LogEntry, LogSeverity};
use distance_culling::culling::position::TransformStore;
use distance_culling::culling::visibility::{ActiveDistanceObject, ActiveFlag, RendererDistanceObject, RendererSwitch};
use distance_culling::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

fn near_object() -> Arc<Mutex<ActiveDistanceObject<ActiveFlag>>> {
    Arc::new(Mutex::new(ActiveDistanceObject::new(Vec3::ZERO, 10.0, ActiveFlag::new(false))))
}

// ============================================================================
// LOGGER SLOT TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());
    Engine::log(LogSeverity::Error, "test::module", "Test error message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 3);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[1].severity, LogSeverity::Warn);
        assert_eq!(captured[2].severity, LogSeverity::Error);
        assert!(captured.iter().all(|e| e.source == "test::module"));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("test_file.rs"));
        assert_eq!(captured[0].line, Some(42));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());
    Engine::reset_logger();
    Engine::log(LogSeverity::Info, "test", "Message 2".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
}

// ============================================================================
// DISTANCE MANAGER LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_registry_changes_logged_at_debug() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let object = near_object();
    let mut manager = DistanceManager::new();
    manager.register(&object);
    manager.unregister(&object);

    let logged = from_source(&entries, "culling::DistanceManager");
    assert_eq!(logged.len(), 2);
    assert!(logged.iter().all(|e| e.severity == LogSeverity::Debug));
    assert!(logged[0].message.contains("registered"));
    assert!(logged[1].message.contains("unregistered"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_tick_timings_at_trace_by_default() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let object = near_object();
    let mut manager = DistanceManager::new();
    manager.register(&object);
    manager.tick(&FrameContext::new(&Vec3::ZERO, &TransformStore::new())).unwrap();

    let timings: Vec<_> = from_source(&entries, "culling::DistanceManager")
        .into_iter()
        .filter(|e| e.message.starts_with("Tick 1"))
        .collect();
    assert_eq!(timings.len(), 1);
    assert_eq!(timings[0].severity, LogSeverity::Trace);
    assert!(timings[0].message.contains("1 requesters"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_tick_timings_at_debug_when_configured() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_min_severity(LogSeverity::Debug);

    let object = near_object();
    let mut manager = DistanceManager::with_config(ManagerConfig {
        log_tick_timings: true,
        ..ManagerConfig::default()
    })
    .unwrap();
    manager.register(&object);
    manager.tick(&FrameContext::new(&Vec3::ZERO, &TransformStore::new())).unwrap();

    let timings: Vec<_> = from_source(&entries, "culling::DistanceManager")
        .into_iter()
        .filter(|e| e.message.starts_with("Tick 1"))
        .collect();
    assert_eq!(timings.len(), 1);
    assert_eq!(timings[0].severity, LogSeverity::Debug);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_min_severity_silences_tick_logs() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_min_severity(LogSeverity::Info);

    let object = near_object();
    let mut manager = DistanceManager::new();
    manager.register(&object);
    manager.tick(&FrameContext::new(&Vec3::ZERO, &TransformStore::new())).unwrap();

    assert!(from_source(&entries, "culling::DistanceManager").is_empty());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_dropped_requester_logged_at_warn() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let object = near_object();
    let mut manager = DistanceManager::new();
    manager.register(&object);
    drop(object);
    manager.tick(&FrameContext::new(&Vec3::ZERO, &TransformStore::new())).unwrap();

    let logged = from_source(&entries, "culling::RequesterRegistry");
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].severity, LogSeverity::Warn);
    assert!(logged[0].message.contains("Pruned 1"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_stale_handle_logged_at_error() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut store = TransformStore::new();
    let handle = store.insert(Vec3::ZERO);
    store.remove(handle);
    let object = Arc::new(Mutex::new(RendererDistanceObject::new(handle, 10.0, vec![Some(RendererSwitch::new(true))])));
    let mut manager = DistanceManager::new();
    manager.register(&object);
    assert!(manager.tick(&FrameContext::new(&Vec3::ZERO, &store)).is_err());

    let store_errors = from_source(&entries, "culling::TransformStore");
    assert_eq!(store_errors.len(), 1);
    assert_eq!(store_errors[0].severity, LogSeverity::Error);
    assert!(store_errors[0].file.is_some());

    let manager_errors: Vec<_> = from_source(&entries, "culling::DistanceManager")
        .into_iter()
        .filter(|e| e.severity == LogSeverity::Error)
        .collect();
    assert_eq!(manager_errors.len(), 1);
    assert!(manager_errors[0].message.contains("stopped before dispatch"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_unknown_unregister_logged_at_debug_on_both_paths() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let stranger = near_object();
    let mut manager = DistanceManager::new();
    manager.unregister(&stranger);
    manager.registration_queue().unregister(&stranger);
    manager.tick(&FrameContext::new(&Vec3::ZERO, &TransformStore::new())).unwrap();

    let ignored: Vec<_> = entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.message.contains("Unregister ignored"))
        .cloned()
        .collect();
    assert_eq!(ignored.len(), 2);
    assert!(ignored.iter().all(|e| e.severity == LogSeverity::Debug));
    assert!(entries.lock().unwrap().iter().all(|e| e.severity < LogSeverity::Warn));

    Engine::reset_logger();
}
