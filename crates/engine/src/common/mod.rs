//! Shared definitions used across the engine.

/// Error taxonomy for configuration, loading, and record validation.
pub mod error;

pub use error::{ConfigError, LoadError, RecordError, RecordErrorKind};
