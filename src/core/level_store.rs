//! Shared, mutable minimum level

use super::log_level::LogLevel;
use parking_lot::RwLock;
use std::sync::Arc;

/// Concurrency-safe cell holding the active minimum [`LogLevel`].
///
/// Clones share the same cell: a logger, every logger derived from it, and
/// its level control endpoint all observe one value. Writes are atomic with
/// respect to concurrent reads; a reader sees either the old or the new
/// level, never anything in between.
#[derive(Debug, Clone, Default)]
pub struct LevelStore {
    level: Arc<RwLock<LogLevel>>,
}

impl LevelStore {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: Arc::new(RwLock::new(level)),
        }
    }

    #[inline]
    pub fn get(&self) -> LogLevel {
        *self.level.read()
    }

    /// Replace the active level. Entries already emitted are unaffected.
    pub fn set(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Gate a record at `candidate` against the current level
    #[inline]
    pub fn enabled(&self, candidate: LogLevel) -> bool {
        self.get().allows(candidate)
    }

    /// Whether both handles point at the same cell
    pub fn same_store(&self, other: &LevelStore) -> bool {
        Arc::ptr_eq(&self.level, &other.level)
    }
}
