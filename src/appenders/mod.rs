//! Appender implementations

pub mod stream;

pub use stream::{MemorySink, SharedWriter, StreamAppender};

pub use crate::core::Appender;
