//! Runtime level control example
//!
//! Serves the level control endpoint and logs a heartbeat every second.
//!
//! Run with: cargo run --example level_control
//!
//! Then, from another terminal:
//!
//! ```text
//! curl -H 'x-admin-token: letmein' localhost:3000/loglevel
//! curl -X PUT -H 'x-admin-token: letmein' -d '{"level":"debug"}' localhost:3000/loglevel
//! ```

use rust_logger_facade::prelude::*;
use std::time::Duration;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Diagnostics of the level endpoint itself go through the global subscriber
    tracing_subscriber::fmt().with_target(false).init();

    let logger = LoggerBuilder::new()
        .backend(Backend::Structured)
        .environment(Environment::Dev)
        .build()?;

    let authorize = authorization(|request| {
        request
            .headers()
            .get("x-admin-token")
            .is_some_and(|token| token == "letmein")
    });
    let app = logger.level_handler(Some(authorize)).into_router("/loglevel");

    let heartbeat = logger.with_fields(&[&"task", &"heartbeat"]);
    tokio::spawn(async move {
        let mut tick = 0u64;
        loop {
            heartbeat.debug("tick", &[&"n", &tick]);
            if tick % 5 == 0 {
                heartbeat.info("still running", &[&"n", &tick]);
            }
            tick += 1;
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    });

    let listener = TcpListener::bind("127.0.0.1:3000").await?;
    logger.info("level control listening", &[&"addr", &listener.local_addr()?]);
    axum::serve(listener, app).await?;

    Ok(())
}
