//! Integration tests for the logger facade
//!
//! These tests verify:
//! - Backend selection and initial level resolution
//! - In-memory recording format and level gating
//! - Level control endpoint served through axum
//! - Level changes reaching every logger derived from the same root

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use rust_logger_facade::prelude::*;
use rust_logger_facade::{info, warn};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const PATH: &str = "/loglevel";

fn no_env(_: &str) -> Option<String> {
    None
}

fn structured_logger(level: LogLevel, sink: &MemorySink) -> SharedLogger {
    LoggerBuilder::new()
        .backend(Backend::Structured)
        .level(level)
        .env_lookup(no_env)
        .writer(sink.writer())
        .build()
        .expect("Failed to build structured logger")
}

async fn send(app: &Router, method: Method, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(PATH)
        .header("x-admin-token", "s3cret")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_logger_for_each_backend() {
    let in_memory = new_logger(&Config::new(Backend::InMemory)).expect("in-memory");
    assert!(!in_memory.level_handler(None).supports_dynamic_level());

    for backend in [Backend::Structured, Backend::Tracing] {
        let logger = LoggerBuilder::new()
            .backend(backend)
            .env_lookup(no_env)
            .writer(MemorySink::new().writer())
            .build()
            .expect("Failed to build logger");

        assert_eq!(logger.current_level(), "info");
        assert!(logger.level_handler(None).supports_dynamic_level());
    }
}

#[test]
fn test_unsupported_backend() {
    let config: Config = serde_json::from_str(r#"{"backend": "logrus"}"#).unwrap();
    let err = new_logger(&config).unwrap_err();

    assert!(matches!(err, LoggerError::UnsupportedBackend(_)));
    assert!(err.to_string().contains("logrus"));
}

#[test]
fn test_initial_level_resolution() {
    let cases = [
        (Some("debug"), Some("error"), "debug"),
        (Some("loud"), Some("error"), "error"),
        (None, Some("warn"), "warn"),
        (None, Some("WARN"), "info"),
        (None, None, "info"),
    ];

    for (env, configured, expected) in cases {
        let mut config = Config::new(Backend::InMemory);
        config.level = configured.map(String::from);
        let override_value = env.map(String::from);

        let logger = LoggerBuilder::new()
            .config(config)
            .env_lookup(move |key| {
                (key == LOG_LEVEL_ENV_VAR)
                    .then(|| override_value.clone())
                    .flatten()
            })
            .build()
            .unwrap();

        assert_eq!(
            logger.current_level(),
            expected,
            "env {:?} config {:?}",
            env,
            configured
        );
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

#[test]
fn test_in_memory_records_through_facade() {
    let memory = InMemoryLogger::new(LogLevel::Warn);
    let logger: SharedLogger = Arc::new(memory.clone());

    logger.info("hidden", &[]);
    logger.warn("disk usage high", &[&"percent", &91]);
    logger
        .with_fields(&[&"component", &"storage"])
        .error("write failed", &[&"retry", &false]);

    assert_eq!(
        memory.entries(),
        vec![
            "[WARN] disk usage high percent=91",
            "[ERROR] write failed retry=false component=storage",
            "",
        ]
    );
}

#[test]
fn test_macros_with_fields() {
    let logger = InMemoryLogger::new(LogLevel::Info);
    let shard = 7;

    info!(logger, "rebalanced shard {}", shard; "moved", 120);
    warn!(logger, "lagging replica");

    assert_eq!(logger.entries()[0], "[INFO] rebalanced shard 7 moved=120");
    assert_eq!(logger.entries()[1], "[WARN] lagging replica");
}

// ============================================================================
// Level control over HTTP
// ============================================================================

fn authorized_router(logger: &SharedLogger) -> Router {
    let authorize = authorization(|request| {
        request
            .headers()
            .get("x-admin-token")
            .is_some_and(|token| token == "s3cret")
    });
    logger.level_handler(Some(authorize)).into_router(PATH)
}

#[tokio::test]
async fn test_get_then_put_then_get() {
    let sink = MemorySink::new();
    let logger = structured_logger(LogLevel::Info, &sink);
    let app = authorized_router(&logger);

    let (status, body) = send(&app, Method::GET, "").await;
    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(payload["level"], "info");

    let (status, body) = send(&app, Method::PUT, r#"{"level":"debug"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, body) = send(&app, Method::GET, "").await;
    assert_eq!(body, r#"{"level":"debug"}"#);
    assert_eq!(logger.current_level(), "debug");
}

#[tokio::test]
async fn test_level_change_reaches_derived_loggers() {
    let sink = MemorySink::new();
    let logger = structured_logger(LogLevel::Error, &sink);
    let derived = logger.with_fields(&[&"worker", &3]);
    let app = authorized_router(&logger);

    derived.info("before change", &[]);
    assert!(sink.lines().is_empty());

    send(&app, Method::PUT, r#"{"level":"info"}"#).await;
    derived.info("after change", &[]);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let record: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(record["message"], "after change");
    assert_eq!(record["worker"], "3");
}

#[tokio::test]
async fn test_bad_requests_leave_level_unchanged() {
    let sink = MemorySink::new();
    let logger = structured_logger(LogLevel::Warn, &sink);
    let app = authorized_router(&logger);

    for body in [r#"{"level":"verbose"}"#, "level=debug", ""] {
        let (status, _) = send(&app, Method::PUT, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
    }

    let (status, _) = send(&app, Method::POST, r#"{"level":"debug"}"#).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(logger.current_level(), "warn");
}

#[tokio::test]
async fn test_unauthorized_requests_rejected() {
    let sink = MemorySink::new();
    let logger = structured_logger(LogLevel::Info, &sink);
    let app = authorized_router(&logger);

    let request = Request::builder()
        .method(Method::PUT)
        .uri(PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"level":"fatal"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(logger.current_level(), "info");
}

#[tokio::test]
async fn test_in_memory_endpoint_not_implemented() {
    let logger = new_logger(&Config::new(Backend::InMemory)).unwrap();
    let app = authorized_router(&logger);

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (status, _) = send(&app, method, r#"{"level":"debug"}"#).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    }
}

#[tokio::test]
async fn test_tracing_backend_endpoint() {
    let sink = MemorySink::new();
    let logger = LoggerBuilder::new()
        .backend(Backend::Tracing)
        .env_lookup(no_env)
        .writer(sink.writer())
        .build()
        .unwrap();
    let app = logger.level_handler(None).into_router(PATH);

    logger.debug("hidden", &[]);
    let (status, _) = send(&app, Method::PUT, r#"{"level":"debug"}"#).await;
    assert_eq!(status, StatusCode::OK);
    logger.debug("visible", &[]);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let event: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(event["level"], "DEBUG");
    assert_eq!(event["fields"]["message"], "visible");
}
