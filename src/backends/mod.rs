//! Logger implementations

pub mod in_memory;
pub mod structured;
pub mod tracing_logger;

pub use in_memory::InMemoryLogger;
pub use structured::StructuredLogger;
pub use tracing_logger::TracingLogger;
