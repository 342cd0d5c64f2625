//! Error types for logcopy-core operations.
//!
//! A level with no matching entry is not an error; see
//! [`ResolveOutcome::Missing`](crate::resolver::ResolveOutcome). Everything
//! here is fatal for the watcher.

use crate::rules::TimestampError;
use std::path::PathBuf;

/// All errors that can occur while resolving or copying.
#[derive(Debug, thiserror::Error)]
pub enum LogcopyError {
    // ─────────────────────────────────────────────────────────────────────
    // Startup Configuration Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Destination path does not exist: {0}")]
    DestinationMissing(PathBuf),

    #[error("Destination path is not a directory: {0}")]
    DestinationNotDirectory(PathBuf),

    #[error("Invalid level pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Resolution Errors
    // ─────────────────────────────────────────────────────────────────────
    /// A name matched the level pattern but the matched text does not parse
    /// with the paired format. The rule pair is wrong, so retrying is pointless.
    #[error("Timestamp {matched:?} in {path} does not parse with {format:?}: {source}")]
    TimestampMismatch {
        path: PathBuf,
        matched: String,
        format: String,
        #[source]
        source: TimestampError,
    },

    // ─────────────────────────────────────────────────────────────────────
    // I/O Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Copy failed: {from} -> {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using LogcopyError.
pub type Result<T> = std::result::Result<T, LogcopyError>;
