//! Runtime log level control over HTTP
//!
//! | Method | Body                  | Success                   | Failure                          |
//! |--------|-----------------------|---------------------------|----------------------------------|
//! | GET    |                       | 200 `{"level":"<level>"}` |                                  |
//! | PUT    | `{"level":"<level>"}` | 200, empty body           | 400 bad JSON or unknown level    |
//! | other  |                       |                           | 405                              |
//!
//! An authorization predicate, when configured, runs before method dispatch
//! and answers 403 on rejection. Handlers of backends without runtime level
//! support answer 501 to everything.

use crate::core::{LevelStore, LogLevel, LoggerError, Result};
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{Method, Request, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Decides whether an inbound request may read or change the level
pub type AuthorizationHandler = Arc<dyn Fn(&Request<Bytes>) -> bool + Send + Sync>;

/// Wrap a predicate as an [`AuthorizationHandler`]
///
/// ```
/// use rust_logger_facade::http::authorization;
///
/// let authorize = authorization(|request| {
///     request.headers().get("x-admin-token").is_some_and(|token| token == "s3cret")
/// });
/// ```
pub fn authorization<F>(predicate: F) -> AuthorizationHandler
where
    F: Fn(&Request<Bytes>) -> bool + Send + Sync + 'static,
{
    Arc::new(predicate)
}

const UNSUPPORTED_MESSAGE: &str = "log level control not supported for this logger";

/// Body of GET responses and PUT requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPayload {
    #[serde(default)]
    pub level: String,
}

/// Parse a PUT body into a level. Malformed JSON and unknown levels are
/// both client errors.
pub fn parse_level_payload(body: &[u8]) -> Result<LogLevel> {
    let payload: LevelPayload = serde_json::from_slice(body)
        .map_err(|err| LoggerError::invalid_payload(err.to_string()))?;
    payload.level.parse()
}

#[derive(Clone)]
enum Mode {
    Dynamic {
        store: LevelStore,
        authorize: Option<AuthorizationHandler>,
    },
    Unsupported,
}

/// Request handler bound to one logger's level.
///
/// Synchronous and framework-neutral: it maps an `http::Request<Bytes>` to
/// an `http::Response<String>`. See [`LevelHandler::into_router`] to mount it
/// on an axum router.
#[derive(Clone)]
pub struct LevelHandler {
    mode: Mode,
}

impl LevelHandler {
    /// Handler reading and writing `store`
    pub fn dynamic(store: LevelStore, authorize: Option<AuthorizationHandler>) -> Self {
        Self {
            mode: Mode::Dynamic { store, authorize },
        }
    }

    /// Handler answering 501 to every request
    pub fn unsupported() -> Self {
        Self {
            mode: Mode::Unsupported,
        }
    }

    pub fn supports_dynamic_level(&self) -> bool {
        matches!(self.mode, Mode::Dynamic { .. })
    }

    pub fn handle(&self, request: &Request<Bytes>) -> Response<String> {
        let (store, authorize) = match &self.mode {
            Mode::Unsupported => {
                return text_response(StatusCode::NOT_IMPLEMENTED, UNSUPPORTED_MESSAGE)
            }
            Mode::Dynamic { store, authorize } => (store, authorize),
        };

        if let Some(authorize) = authorize {
            if !authorize(request) {
                tracing::debug!(method = %request.method(), "log level request rejected");
                return text_response(StatusCode::FORBIDDEN, "unauthorized");
            }
        }

        match *request.method() {
            Method::GET => level_response(store.get()),
            Method::PUT => match parse_level_payload(request.body()) {
                Ok(level) => {
                    let previous = store.get();
                    store.set(level);
                    tracing::info!(from = %previous, to = %level, "log level changed");
                    empty_response(StatusCode::OK)
                }
                Err(err) => text_response(StatusCode::BAD_REQUEST, &err.to_string()),
            },
            _ => text_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
        }
    }
}

impl fmt::Debug for LevelHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mode {
            Mode::Dynamic { store, authorize } => f
                .debug_struct("LevelHandler")
                .field("level", &store.get())
                .field("authorized", &authorize.is_some())
                .finish(),
            Mode::Unsupported => f.write_str("LevelHandler(unsupported)"),
        }
    }
}

fn empty_response(status: StatusCode) -> Response<String> {
    let mut response = Response::new(String::new());
    *response.status_mut() = status;
    response
}

fn level_response(level: LogLevel) -> Response<String> {
    let body = serde_json::json!({ "level": level.as_str() }).to_string();
    let mut response = Response::new(body);
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn text_response(status: StatusCode, message: &str) -> Response<String> {
    let mut response = Response::new(message.to_string());
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, body: &'static str) -> Request<Bytes> {
        let mut request = Request::new(Bytes::from_static(body.as_bytes()));
        *request.method_mut() = method;
        *request.uri_mut() = "/loglevel".parse().unwrap();
        request
    }

    fn handler(level: LogLevel) -> (LevelHandler, LevelStore) {
        let store = LevelStore::new(level);
        (LevelHandler::dynamic(store.clone(), None), store)
    }

    #[test]
    fn test_get_reports_level() {
        let (handler, _) = handler(LogLevel::Warn);
        let response = handler.handle(&request(Method::GET, ""));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(response.body(), r#"{"level":"warn"}"#);
    }

    #[test]
    fn test_put_changes_level() {
        let (handler, store) = handler(LogLevel::Info);
        let response = handler.handle(&request(Method::PUT, r#"{"level":"debug"}"#));

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());
        assert_eq!(store.get(), LogLevel::Debug);
    }

    #[test]
    fn test_put_rejects_malformed_json() {
        let (handler, store) = handler(LogLevel::Info);
        let response = handler.handle(&request(Method::PUT, r#"{"level":"#));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.body().starts_with("invalid payload"));
        assert_eq!(store.get(), LogLevel::Info);
    }

    #[test]
    fn test_put_rejects_unknown_level() {
        let (handler, store) = handler(LogLevel::Info);

        for body in [r#"{"level":"verbose"}"#, r#"{"level":"DEBUG"}"#, r#"{}"#] {
            let response = handler.handle(&request(Method::PUT, body));
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
            assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        }
        assert_eq!(store.get(), LogLevel::Info);
    }

    #[test]
    fn test_other_methods_not_allowed() {
        let (handler, _) = handler(LogLevel::Info);

        for method in [Method::POST, Method::DELETE, Method::PATCH] {
            let response = handler.handle(&request(method, r#"{"level":"debug"}"#));
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        }
    }

    #[test]
    fn test_authorization_runs_first() {
        let store = LevelStore::new(LogLevel::Info);
        let handler = LevelHandler::dynamic(store.clone(), Some(authorization(|_| false)));

        for (method, body) in [
            (Method::PUT, r#"{"level":"debug"}"#),
            (Method::PUT, "not json"),
            (Method::GET, ""),
            (Method::DELETE, ""),
        ] {
            let response = handler.handle(&request(method, body));
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
        assert_eq!(store.get(), LogLevel::Info);
    }

    #[test]
    fn test_authorization_sees_request() {
        let store = LevelStore::new(LogLevel::Info);
        let authorize = authorization(|request| {
            request
                .headers()
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                == Some("Bearer secret")
        });
        let handler = LevelHandler::dynamic(store.clone(), Some(authorize));

        let mut allowed = request(Method::PUT, r#"{"level":"error"}"#);
        allowed
            .headers_mut()
            .insert("authorization", HeaderValue::from_static("Bearer secret"));

        assert_eq!(handler.handle(&allowed).status(), StatusCode::OK);
        assert_eq!(store.get(), LogLevel::Error);
        assert_eq!(
            handler.handle(&request(Method::GET, "")).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_unsupported_answers_501() {
        let handler = LevelHandler::unsupported();
        assert!(!handler.supports_dynamic_level());

        for method in [Method::GET, Method::PUT, Method::POST] {
            let response = handler.handle(&request(method, r#"{"level":"debug"}"#));
            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        }
    }

    #[test]
    fn test_parse_level_payload() {
        assert_eq!(
            parse_level_payload(br#"{"level":"fatal","extra":1}"#).unwrap(),
            LogLevel::Fatal
        );
        assert!(matches!(
            parse_level_payload(br#""debug""#),
            Err(LoggerError::InvalidPayload(_))
        ));
        assert!(matches!(
            parse_level_payload(br#"{"level":""}"#),
            Err(LoggerError::InvalidLevel(_))
        ));
    }
}
