//! Error types for the archive lifecycle.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while bundling, deleting, or purging.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// No zip archive matched the requested period.
    #[error("no zip files found in the specified date range")]
    NoArchivesInRange,

    /// A requested root directory does not exist.
    #[error("directory not found: {path:?}")]
    DirectoryNotFound {
        /// The directory that was not found.
        path: PathBuf,
    },

    /// Writing a zip bundle failed.
    #[error("failed to bundle {path:?}: {source}")]
    Bundle {
        /// The archive being written.
        path: PathBuf,
        /// The underlying zip error.
        source: zip::result::ZipError,
    },

    /// A filesystem operation failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// The file the operation touched.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Scanning a root failed.
    #[error("scan failed: {0}")]
    Scan(#[from] sawmill_scan::ScanError),

    /// A spawned archive task was cancelled or panicked.
    #[error("archive task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
