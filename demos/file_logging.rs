//! File logging example
//!
//! Demonstrates routing tags to separate files with the builder.
//!
//! Run with: cargo run --example file_logging

use tag_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Tag Logger - File Logging Example ===\n");

    let dir = std::env::temp_dir().join("tag_logger_demo");
    std::fs::create_dir_all(&dir)?;
    let app_log = dir.join("app.log");
    let error_log = dir.join("errors.log");

    let logger = Logger::builder()
        .console_with([LogTag::Info, LogTag::Warning, LogTag::Error], "<$t> $m")
        .file(&app_log)
        .file_with(&error_log, LogTag::Error, "$d $i $m")
        .build()?;

    for i in 0..5 {
        logger.info(format!("Processing item {}", i))?;
    }
    logger.warning("Item 3 took longer than expected")?;
    logger.log(&[LogTag::Error, LogTag::Debug], "Item 4 failed validation")?;
    logger.flush()?;

    println!("\nLogs written to:");
    println!("  {}", app_log.display());
    println!("  {}", error_log.display());
    println!("\nMetrics: {} calls, {} lines", logger.metrics().calls(), logger.metrics().lines_written());

    Ok(())
}
