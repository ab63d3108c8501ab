//! # sawmill-scan
//!
//! Log corpus scanning and error-signature analysis.
//!
//! This crate provides:
//!
//! - [`Period`] — Inclusive calendar-date window over file creation time
//! - [`SizeRange`] — Inclusive kilobyte band over file length
//! - [`DirectorySet`] — Validated, trimmed set of scan roots
//! - [`Outcome`] — Tagged found/empty result for every operation
//! - [`signature`] — Log-line normalization into error signatures
//! - [`scanner`] — Filtered directory walking
//! - [`query`] — Counting and searching log files
//! - [`aggregate`] — Per-file unique/duplicate signature counts
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use sawmill_scan::{count_logs, DirectorySet, Outcome, Period};
//!
//! # async fn demo() -> sawmill_scan::Result<()> {
//! let dirs = DirectorySet::new(["/var/log/app"])?;
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();
//! let period = Period::new(start, end)?;
//!
//! match count_logs(&dirs, period).await? {
//!     Outcome::Found(count) => println!("{count} logs in range"),
//!     Outcome::Empty { reason } => println!("{reason}"),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
pub mod error;
pub mod query;
pub mod scanner;
pub mod signature;
pub mod types;

// Re-export main types
pub use aggregate::{count_duplicate_errors, count_unique_errors, tally_lines, ErrorMetric};
pub use error::{Result, ScanError};
pub use query::{count_logs, search_logs, search_logs_by_size};
pub use scanner::{scan_root, FileKind, ScanOptions, ScannedFile};
pub use types::{
    DirectorySet, Outcome, Period, SizeRange, NO_LOGS_IN_DIRECTORIES, NO_LOGS_IN_PERIOD,
    NO_LOGS_IN_SIZE_RANGE,
};
