//! Core request and outcome types for the scanning engine.
//!
//! This module provides:
//! - [`Period`] — Inclusive calendar-date window over file creation time
//! - [`SizeRange`] — Inclusive kilobyte band over file length
//! - [`DirectorySet`] — Validated, trimmed set of scan roots
//! - [`Outcome`] — Tagged found/empty result used by every operation

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Sentinel reason when a period-filtered operation matches nothing.
pub const NO_LOGS_IN_PERIOD: &str = "no logs found for the specified date range";

/// Sentinel reason when the scanned directories hold no log files at all.
pub const NO_LOGS_IN_DIRECTORIES: &str = "no log files found in the specified directories";

/// Sentinel reason when no log file falls inside the requested size band.
pub const NO_LOGS_IN_SIZE_RANGE: &str = "no log files found in the specified size range";

/// An inclusive calendar-date window over file creation time.
///
/// Construction enforces `start <= end`, so operations only ever see
/// valid windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Creates a period covering `start` through `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPeriod`] when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ScanError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Start of the window (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// End of the window (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks whether a timestamp's calendar date (UTC) falls inside the
    /// window.
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let date = timestamp.date_naive();
        self.start <= date && date <= self.end
    }
}

/// An inclusive size band over file length, expressed in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    min_kb: u64,
    max_kb: u64,
}

impl SizeRange {
    /// Creates a size band covering `min_kb` through `max_kb` kilobytes,
    /// both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidSizeRange`] when either bound is zero
    /// or `min_kb > max_kb`.
    pub fn new(min_kb: u64, max_kb: u64) -> Result<Self> {
        if min_kb == 0 || max_kb == 0 {
            return Err(ScanError::InvalidSizeRange {
                min_kb,
                max_kb,
                reason: "bounds must be greater than zero".to_string(),
            });
        }
        if min_kb > max_kb {
            return Err(ScanError::InvalidSizeRange {
                min_kb,
                max_kb,
                reason: "minimum exceeds maximum".to_string(),
            });
        }
        Ok(Self { min_kb, max_kb })
    }

    /// Minimum size in kilobytes (inclusive).
    #[must_use]
    pub const fn min_kb(&self) -> u64 {
        self.min_kb
    }

    /// Maximum size in kilobytes (inclusive).
    #[must_use]
    pub const fn max_kb(&self) -> u64 {
        self.max_kb
    }

    /// Checks whether a byte length falls inside the band.
    ///
    /// Length is reduced to whole kilobytes first, so a 1500-byte file is
    /// a 1 KB file for filtering purposes.
    #[must_use]
    pub const fn contains(&self, len_bytes: u64) -> bool {
        let kb = len_bytes / 1024;
        self.min_kb <= kb && kb <= self.max_kb
    }
}

/// A validated, trimmed set of scan roots.
///
/// Each root is processed independently by the operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySet {
    roots: Vec<PathBuf>,
}

impl DirectorySet {
    /// Builds a directory set from raw path strings, trimming surrounding
    /// whitespace from every entry and collapsing repeated entries to one.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::EmptyDirectorySet`] when no entries are given
    /// and [`ScanError::BlankDirectory`] when an entry trims to nothing.
    pub fn new<I, S>(roots: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trimmed = Vec::new();
        for root in roots {
            let root = root.as_ref().trim();
            if root.is_empty() {
                return Err(ScanError::BlankDirectory);
            }
            let root = PathBuf::from(root);
            // One concurrent unit per root; a repeated root must not
            // race itself over the same files.
            if !trimmed.contains(&root) {
                trimmed.push(root);
            }
        }
        if trimmed.is_empty() {
            return Err(ScanError::EmptyDirectorySet);
        }
        Ok(Self { roots: trimmed })
    }

    /// Builds a directory set holding a single root.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::BlankDirectory`] when the root trims to
    /// nothing.
    pub fn single(root: impl AsRef<str>) -> Result<Self> {
        Self::new([root.as_ref()])
    }

    /// The scan roots, in the order supplied.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

/// Tagged result distinguishing "found data" from "ran fine, found
/// nothing".
///
/// Failures stay on the surrounding [`Result`]; callers branch on the
/// tag and never inspect message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The operation matched at least one file.
    Found(T),
    /// The operation matched nothing.
    Empty {
        /// Human-readable sentinel saying why the result is empty.
        reason: String,
    },
}

impl<T> Outcome<T> {
    /// Builds an empty outcome from a sentinel reason.
    #[must_use]
    pub fn empty(reason: impl Into<String>) -> Self {
        Self::Empty {
            reason: reason.into(),
        }
    }

    /// True when the operation found something.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found value, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Empty { .. } => None,
        }
    }
}
