//! Error types for the scanning engine.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that can occur while scanning and analyzing log directories.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A requested root directory does not exist.
    #[error("directory not found: {path:?}")]
    DirectoryNotFound {
        /// The directory that was not found.
        path: PathBuf,
    },

    /// No directories were supplied.
    #[error("no directories provided")]
    EmptyDirectorySet,

    /// A directory entry was blank after trimming.
    #[error("blank directory entry")]
    BlankDirectory,

    /// The period bounds are reversed.
    #[error("invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// The size bounds are unusable.
    #[error("invalid size range [{min_kb} KB, {max_kb} KB]: {reason}")]
    InvalidSizeRange {
        /// Requested minimum in kilobytes.
        min_kb: u64,
        /// Requested maximum in kilobytes.
        max_kb: u64,
        /// Why the range was rejected.
        reason: String,
    },

    /// Reading a file or directory failed.
    #[error("failed to read {path:?}: {source}")]
    Read {
        /// The file or directory that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A spawned scan task was cancelled or panicked.
    #[error("scan task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
