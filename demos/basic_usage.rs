//! Basic logger usage example
//!
//! Demonstrates console targets, tag filtering and custom templates.
//!
//! Run with: cargo run --example basic_usage

use tag_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Tag Logger - Basic Usage Example ===\n");

    let logger = Logger::new();

    // Every tag, default "[$d][$i] <$t> $m" layout
    let console = logger.add_console_target();

    println!("1. Logging with each tag:");
    logger.trace("This is a trace message")?;
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warning("This is a warning message")?;
    logger.error("This is an error message")?;

    println!("\n2. Several tags on one call:");
    logger.log(&[LogTag::Warning, LogTag::Debug], "Rendered once, tags joined with '/'")?;

    println!("\n3. Restricting the console to warnings and errors:");
    logger.configure_target(console, [LogTag::Warning, LogTag::Error], "$t: $m")?;
    logger.info("Info message (hidden)")?;
    logger.warning("Warning message (visible)")?;

    println!("\n4. Rejected template:");
    match logger.add_console_target_with_format("$d $x") {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   {}", e),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
