use base::logging::{FileLogger, StdoutLogger, format_record, init_file_logger, init_stdout_logger};
use log::Log;
use std::fs;

fn log_warning(logger: &dyn Log, message: &str) {
    logger.log(
        &log::RecordBuilder::new()
            .level(log::Level::Warn)
            .target("test")
            .file(Some("session.rs"))
            .line(Some(42))
            .args(format_args!("{}", message))
            .build(),
    );
    logger.flush();
}

#[test]
fn test_format_record_fields() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Error)
        .file(Some("tracker.rs"))
        .line(Some(100))
        .args(format_args!("form broke"))
        .build();
    let line = format_record(&record);

    assert!(line.contains("[ERROR]"));
    assert!(line.contains("thread:"));
    assert!(line.contains("tracker.rs:100"));
    assert!(line.ends_with("form broke"));
}

#[test]
fn test_stdout_logger_enabled() {
    let metadata = log::MetadataBuilder::new().level(log::Level::Info).build();
    assert!(StdoutLogger.enabled(&metadata));
    log_warning(&StdoutLogger, "stdout smoke test");
}

#[test]
fn test_file_logger_writes_to_dated_file() {
    let dir = std::env::temp_dir().join(format!("coach-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    log_warning(&logger, "hold broken at 12.0s");

    let entries: Vec<_> = fs::read_dir(&dir)
        .expect("Failed to read log directory")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1);

    let content = fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.contains("[WARN]"));
    assert!(content.contains("session.rs:42"));
    assert!(content.contains("hold broken at 12.0s"));
    assert!(content.ends_with('\n'));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_init_stdout_logger_installs_global_logger() {
    init_stdout_logger();
    let metadata = log::MetadataBuilder::new().level(log::Level::Info).build();
    assert!(log::logger().enabled(&metadata));
    log::info!("global logger installed");
}

#[test]
fn test_init_file_logger_invalid_dir_returns_error() {
    assert!(init_file_logger("/proc/nonexistent/path").is_err());
}
