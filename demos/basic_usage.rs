//! Basic logger usage example
//!
//! Demonstrates backend selection, key/value fields and level gating.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_facade::prelude::*;
use rust_logger_facade::{debug, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    // Text output, as used during development
    let logger = LoggerBuilder::new()
        .backend(Backend::Structured)
        .environment(Environment::Dev)
        .level(LogLevel::Debug)
        .build()?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[&"port", &8080]);
    logger.warn("This is a warning message", &[&"disk_free_pct", &7]);
    logger.error("This is an error message", &[&"code", &500]);

    println!("\n2. Injected fields and macros:");
    let request_logger = logger.with_fields(&[&"request_id", &"r-42"]);
    info!(request_logger, "Handled {} items", 3; "elapsed_ms", 12);
    debug!(request_logger, "Cache state"; "hits", 10, "misses", 2);

    println!("\n3. JSON output, as used in production:");
    let json_logger = new_logger(&Config::new(Backend::Structured).with_level("warn"))?;
    json_logger.info("Info message (hidden)", &[]);
    warn!(json_logger, "Warning message (visible)"; "attempt", 2);
    json_logger.sync();

    println!("\n4. In-memory backend for tests:");
    let memory = InMemoryLogger::new(LogLevel::Info);
    memory.with_fields(&[&"app", &"demo"]).info("recorded", &[&"k", &"v"]);
    for entry in memory.entries() {
        println!("   {:?}", entry);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
