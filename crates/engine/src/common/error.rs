//! Error taxonomy for the dispatcher simulator.
//!
//! Three failure families exist:
//! 1. **Configuration** ([`ConfigError`]): invalid settings; fatal to start-up.
//! 2. **Loading** ([`LoadError`], [`RecordError`]): file-level failures are fatal,
//!    per-record failures are collected and skipped.
//! 3. **Contract violations** (releasing resources that were never granted) are
//!    programming bugs and assert inside the owning component instead of
//!    appearing here.
//!
//! Admission rejection is deliberately absent: it is a per-round outcome of the
//! dispatcher, not an error.

use thiserror::Error;

/// Configuration values the engine cannot honour.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text did not deserialize into a configuration.
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The memory arena would have no space at all.
    #[error("memory capacity must be non-zero")]
    ZeroCapacity,

    /// The real-time region would swallow the whole arena, leaving user
    /// processes nothing to allocate from.
    #[error("real-time reserved size {reserved} must be smaller than the arena capacity {capacity}")]
    ReservedExceedsCapacity {
        /// Configured reserved size.
        reserved: u64,
        /// Configured arena capacity.
        capacity: u64,
    },

    /// A zero quantum would make user processes run forever.
    #[error("time quantum must be non-zero")]
    ZeroQuantum,

    /// At least one user level is needed as a demotion floor.
    #[error("at least one user priority level is required")]
    NoUserLevels,
}

/// File-level failure while loading a dispatch list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dispatch list could not be read at all.
    #[error("could not read dispatch list '{path}': {source}")]
    Io {
        /// Path that failed to open or read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A single malformed dispatch-list record, tagged with its line number.
///
/// Record errors are collected and reported; the offending record is skipped
/// and loading continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct RecordError {
    /// One-based line number within the dispatch list.
    pub line: usize,
    /// What was wrong with the record.
    pub kind: RecordErrorKind,
}

/// The ways a dispatch-list record can fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordErrorKind {
    /// Wrong number of comma-separated fields.
    #[error("expected 8 comma-separated fields, found {0}")]
    FieldCount(usize),

    /// A field did not parse as a non-negative integer.
    #[error("field '{field}' is not a non-negative integer: '{value}'")]
    InvalidInteger {
        /// Name of the offending field.
        field: &'static str,
        /// Raw text that failed to parse.
        value: String,
    },

    /// Priority beyond the lowest configured user level.
    #[error("priority {found} exceeds the lowest configured level {lowest}")]
    PriorityOutOfRange {
        /// Priority found in the record.
        found: u64,
        /// Lowest user level the configuration allows.
        lowest: u8,
    },

    /// A user process asked for no processor time at all.
    #[error("a user process must request at least one unit of processor time")]
    ZeroProcessorTime,

    /// Memory request of zero or beyond the arena capacity.
    #[error("memory request {requested} outside 1..={capacity}")]
    MemoryOutOfRange {
        /// Units requested by the record.
        requested: u64,
        /// Configured arena capacity.
        capacity: u64,
    },
}
