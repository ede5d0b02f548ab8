//! Integration tests for the tag logger
//!
//! These tests verify:
//! - Default line layout
//! - Tag filtering and fan-out across targets
//! - File targets
//! - Template errors at registration time
//! - Target reconfiguration and removal
//! - Thread safety

use std::fs;
use std::sync::Arc;
use tag_logger::prelude::*;
use tempfile::TempDir;

/// Check `[D/M/YYYY][HH:MM:SS] <TAGS> message` and return the `<TAGS> message` tail
fn strip_default_prefix(line: &str) -> &str {
    let rest = line.strip_prefix('[').expect("line starts with '['");
    let (date, rest) = rest.split_once("][").expect("date closes with ']['");
    let (time, rest) = rest.split_once("] ").expect("time closes with '] '");

    let date_parts: Vec<&str> = date.split('/').collect();
    assert_eq!(date_parts.len(), 3, "date '{}' is d/m/yyyy", date);
    let day: u32 = date_parts[0].parse().expect("numeric day");
    let month: u32 = date_parts[1].parse().expect("numeric month");
    assert!((1..=31).contains(&day));
    assert!((1..=12).contains(&month));
    assert!(!date_parts[0].starts_with('0') && !date_parts[1].starts_with('0'));
    assert_eq!(date_parts[2].len(), 4);

    let time_parts: Vec<&str> = time.split(':').collect();
    assert_eq!(time_parts.len(), 3, "time '{}' is HH:MM:SS", time);
    for part in &time_parts {
        assert_eq!(part.len(), 2, "time field '{}' is zero padded", part);
        part.parse::<u32>().expect("numeric time field");
    }

    rest
}

#[test]
fn test_default_format_line() {
    let logger = Logger::new();
    let sink = MemorySink::new();
    logger.add_target(sink.clone());

    logger.info("hello").expect("log");

    let content = sink.contents();
    assert!(content.ends_with('\n'));
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(strip_default_prefix(&lines[0]), "<INFO> hello");
}

#[test]
fn test_default_format_multiple_tags() {
    let logger = Logger::new();
    let sink = MemorySink::new();
    logger.add_target(sink.clone());

    logger
        .log(&[LogTag::Debug, LogTag::Trace, LogTag::Error], "three tags")
        .expect("log");

    let lines = sink.lines();
    assert_eq!(strip_default_prefix(&lines[0]), "<DEBUG/TRACE/ERROR> three tags");
}

#[test]
fn test_console_target_registers() {
    let logger = Logger::new();
    logger.add_console_target();
    logger
        .add_console_target_with(LogTag::Error, "console: $m")
        .expect("valid format");

    assert_eq!(logger.target_count(), 2);
    logger.info("integration test console output").expect("stdout write");
    assert_eq!(logger.metrics().lines_written(), 1);
}

#[test]
fn test_fan_out_by_tag() {
    let logger = Logger::new();
    let everything = MemorySink::new();
    let errors = MemorySink::new();
    let debug = MemorySink::new();

    logger.add_target_with_format(everything.clone(), "$m").expect("valid format");
    logger
        .add_target_with(errors.clone(), [LogTag::Error, LogTag::Warning], "$m")
        .expect("valid format");
    logger
        .add_target_with(debug.clone(), LogTag::Debug, "$m")
        .expect("valid format");

    logger.info("a").expect("log");
    logger.warning("b").expect("log");
    logger.debug("c").expect("log");
    logger.log(&[LogTag::Error, LogTag::Debug], "d").expect("log");
    logger.trace("e").expect("log");

    assert_eq!(everything.lines(), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(errors.lines(), vec!["b", "d"]);
    assert_eq!(debug.lines(), vec!["c", "d"]);
    assert_eq!(logger.metrics().calls(), 5);
    assert_eq!(logger.metrics().lines_written(), 9);
}

#[test]
fn test_file_target() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let logger = Logger::new();
    logger
        .add_file_target_with(&log_file, [LogTag::Error], "$t $m")
        .expect("Failed to add file target");

    logger.error("first").expect("log");
    logger.info("skipped").expect("log");
    logger.log(&[LogTag::Info, LogTag::Error], "second").expect("log");

    // Every call is flushed before returning
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "ERROR first\nINFO/ERROR second\n");
}

#[test]
fn test_file_target_default_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("default.log");

    let logger = Logger::new();
    logger.add_file_target(&log_file).expect("Failed to add file target");
    logger.warning("disk at 91%").expect("log");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let line = content.lines().next().expect("one line");
    assert_eq!(strip_default_prefix(line), "<WARNING> disk at 91%");
}

#[test]
fn test_file_target_bad_format_creates_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("never.log");

    let logger = Logger::new();
    let err = logger
        .add_file_target_with_format(&log_file, "[$d] $p")
        .expect_err("bad format");

    assert!(matches!(err, LoggerError::Format { character: 'p', position: 6 }));
    assert_eq!(logger.target_count(), 0);
    assert!(!log_file.exists());
}

#[test]
fn test_file_target_open_failure_propagates() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("no_such_dir").join("app.log");

    let logger = Logger::new();
    let err = logger.add_file_target(&log_file).expect_err("missing directory");
    assert!(matches!(err, LoggerError::IoOperation { .. }));
    assert_eq!(logger.target_count(), 0);
}

#[test]
fn test_reconfigure_uses_newest_template_only() {
    let logger = Logger::new();
    let sink = MemorySink::new();
    let id = logger.add_target(sink.clone());

    logger
        .configure_target(id, TagSet::all(), "first $m")
        .expect("known target");
    logger
        .configure_target(id, [LogTag::Info], "second $m")
        .expect("known target");

    logger.info("x").expect("log");
    logger.error("y").expect("log");

    assert_eq!(sink.contents(), "second x\n");
    assert_eq!(logger.target_count(), 1);
}

#[test]
fn test_removed_sink_stays_usable() {
    use std::io::Write;

    let logger = Logger::new();
    let sink = MemorySink::new();
    let id = logger
        .add_target_with_format(sink.clone(), "$m")
        .expect("valid format");

    logger.info("logged").expect("log");
    let mut returned = logger.remove_target(id).expect("registered");
    returned.write_all(b"after removal\n").expect("sink not closed");

    assert_eq!(sink.lines(), vec!["logged", "after removal"]);
}

#[test]
fn test_builder_with_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let all_file = temp_dir.path().join("all.log");
    let error_file = temp_dir.path().join("error.log");

    let logger = Logger::builder()
        .file_with(&all_file, TagSet::all(), "$m")
        .file_with(&error_file, LogTag::Error, "$t: $m")
        .build()
        .expect("valid configuration");

    logger.info("started").expect("log");
    logger.error("failed").expect("log");
    drop(logger);

    assert_eq!(fs::read_to_string(&all_file).expect("read"), "started\nfailed\n");
    assert_eq!(fs::read_to_string(&error_file).expect("read"), "ERROR: failed\n");
}

#[test]
fn test_concurrent_logging_keeps_lines_whole() {
    let logger = Arc::new(Logger::new());
    let sink = MemorySink::new();
    logger
        .add_target_with_format(sink.clone(), "<$t> $m")
        .expect("valid format");

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger_clone = Arc::clone(&logger);
        let handle = std::thread::spawn(move || {
            for i in 0..20 {
                logger_clone
                    .info(format!("Thread {} - Message {}", thread_id, i))
                    .expect("log");
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 100, "Should have 100 lines from 5 threads * 20 messages");
    for line in &lines {
        assert!(line.starts_with("<INFO> Thread "), "interleaved line: {}", line);
    }
}
