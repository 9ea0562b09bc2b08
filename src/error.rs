//! Error types for the packaging pipeline.
//!
//! Every pipeline failure is fatal to the invocation: errors propagate up to
//! the CLI layer, which prints a single diagnostic and exits non-zero. The
//! one exception is validation, which aggregates every problem before failing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, ExoportError>;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum ExoportError {
    /// Bad, missing, or conflicting configuration, detected before any I/O
    #[error("invalid configuration: {}", problems.join("; "))]
    Validation {
        /// Every validation problem found, in flag order
        problems: Vec<String>,
    },

    /// Archiver input path does not exist or is not a directory
    #[error("{} is not a directory", path.display())]
    NotADirectory {
        /// The rejected content path
        path: PathBuf,
    },

    /// Local file read/write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive construction failure
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Network-level failure on submit or download
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service returned an unparseable or semantically invalid response
    #[error("service error: {reason}")]
    Service {
        /// Reason for the error
        reason: String,
    },
}
