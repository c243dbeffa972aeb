//! Distributed tracing context carried into log records

use serde::{Deserialize, Serialize};

const TRACE_ID_LEN: usize = 32;
const SPAN_ID_LEN: usize = 16;

/// Tracing context for distributed tracing
///
/// Identifiers use the W3C trace-context text form: a 32 hex digit trace ID
/// and a 16 hex digit span ID, both lowercase and not all zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingContext {
    /// Trace ID for request correlation
    pub trace_id: String,

    /// Span ID for this operation
    pub span_id: String,

    /// Parent span ID (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
}

impl TracingContext {
    /// Create a new tracing context
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            parent_span_id: None,
        }
    }

    /// Set parent span ID
    pub fn with_parent(mut self, parent_span_id: impl Into<String>) -> Self {
        self.parent_span_id = Some(parent_span_id.into());
        self
    }

    /// Whether both identifiers are well-formed and non-zero
    pub fn is_valid(&self) -> bool {
        is_valid_id(&self.trace_id, TRACE_ID_LEN) && is_valid_id(&self.span_id, SPAN_ID_LEN)
    }
}

fn is_valid_id(id: &str, len: usize) -> bool {
    id.len() == len
        && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        && id.bytes().any(|b| b != b'0')
}
