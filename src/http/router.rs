//! axum integration for [`LevelHandler`]

use super::level_handler::LevelHandler;
use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::any;
use axum::Router;

/// Largest accepted request body; level payloads are a few bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

impl LevelHandler {
    /// Mount this handler on `path` for every method.
    ///
    /// `path` must start with `/`.
    ///
    /// ```
    /// use rust_logger_facade::prelude::*;
    ///
    /// let logger = LoggerBuilder::new()
    ///     .backend(Backend::Structured)
    ///     .writer(MemorySink::new().writer())
    ///     .build()
    ///     .unwrap();
    ///
    /// let authorize = authorization(|request| request.headers().contains_key("x-admin-token"));
    /// let app: axum::Router = logger.level_handler(Some(authorize)).into_router("/loglevel");
    /// ```
    pub fn into_router(self, path: &str) -> Router {
        Router::new().route(path, any(serve)).with_state(self)
    }
}

async fn serve(State(handler): State<LevelHandler>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    // An unreadable body is treated as empty: PUT then fails payload
    // validation while authorization and 501 answers stay intact.
    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "failed to read log level request body");
            Default::default()
        }
    };

    handler
        .handle(&http::Request::from_parts(parts, body))
        .map(Body::from)
}
