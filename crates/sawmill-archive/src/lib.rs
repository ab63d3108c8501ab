//! Archive lifecycle for sawmill log directories.
//!
//! Builds on [`sawmill_scan`] to manage aging logs:
//!
//! - **Bundling**: zip the logs of a date range into one dated archive
//!   per directory, removing each log once it is stored
//! - **Archive cleanup**: delete previously created archives by range
//! - **Purging**: delete raw logs by range without archiving them
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use sawmill_archive::archive_logs;
//! use sawmill_scan::{DirectorySet, Period};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let dirs = DirectorySet::new(["/var/log/app"])?;
//! let period = Period::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
//!     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default(),
//! )?;
//! for archive in archive_logs(&dirs, period).await?.found().unwrap_or_default() {
//!     println!("wrote {}", archive.display());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bundle;
pub mod error;
pub mod manager;
pub mod purge;

// Re-export main types
pub use bundle::write_bundle;
pub use error::{ArchiveError, Result};
pub use manager::{archive_logs, bundle_name, delete_archives};
pub use purge::delete_logs;
