//! Directory walking with kind, date, and size filters.
//!
//! This module provides:
//! - [`FileKind`] — Which file class a scan selects
//! - [`ScanOptions`] — Filters applied while walking a root
//! - [`ScannedFile`] — A file surfaced by a scan
//! - [`scan_root`] — Filtered walk of one root on the blocking pool

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{Result, ScanError};
use crate::types::{Period, SizeRange};

/// Which file class a scan selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Plaintext logs, `*.log`.
    Log,
    /// Zip archives, `*.zip`.
    Archive,
}

impl FileKind {
    /// The file extension this kind matches.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Archive => "zip",
        }
    }
}

/// Filters applied while walking a root.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    kind: FileKind,
    recursive: bool,
    period: Option<Period>,
    size: Option<SizeRange>,
}

impl ScanOptions {
    /// Options selecting log files, recursively, with no other filter.
    #[must_use]
    pub const fn logs() -> Self {
        Self {
            kind: FileKind::Log,
            recursive: true,
            period: None,
            size: None,
        }
    }

    /// Options selecting zip archives, recursively, with no other filter.
    #[must_use]
    pub const fn archives() -> Self {
        Self {
            kind: FileKind::Archive,
            recursive: true,
            period: None,
            size: None,
        }
    }

    /// Restricts the walk to the root directory itself.
    #[must_use]
    pub const fn top_level(mut self) -> Self {
        self.recursive = false;
        self
    }

    /// Keeps only files whose creation date falls inside `period`.
    #[must_use]
    pub const fn within(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    /// Keeps only files whose length falls inside `size`.
    #[must_use]
    pub const fn sized(mut self, size: SizeRange) -> Self {
        self.size = Some(size);
        self
    }
}

/// A file surfaced by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedFile {
    /// Where the file lives.
    pub path: PathBuf,
    /// Creation timestamp from filesystem metadata.
    pub created: DateTime<Utc>,
    /// Length in bytes.
    pub len: u64,
}

/// Walks one root and returns the files passing every filter in
/// `options`.
///
/// The walk runs on the blocking pool. Unreadable entries are skipped
/// with a warning; symlinks are not followed; output order is
/// unspecified.
///
/// # Errors
///
/// Returns [`ScanError::DirectoryNotFound`] when `root` is not a
/// directory and [`ScanError::Read`] when the root itself cannot be
/// walked.
pub async fn scan_root(root: &Path, options: ScanOptions) -> Result<Vec<ScannedFile>> {
    let root = root.to_path_buf();
    tokio::task::spawn_blocking(move || walk_root(&root, options)).await?
}

fn walk_root(root: &Path, options: ScanOptions) -> Result<Vec<ScannedFile>> {
    if !root.is_dir() {
        return Err(ScanError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut found = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).max_depth(max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.path() == Some(root) {
                    return Err(ScanError::Read {
                        path: root.to_path_buf(),
                        source: err.into(),
                    });
                }
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path
            .extension()
            .is_some_and(|ext| ext == options.kind.extension())
        {
            continue;
        }

        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping file without readable metadata");
                continue;
            }
        };
        if let Some(size) = options.size {
            if !size.contains(meta.len()) {
                continue;
            }
        }
        let created = match created_at(&meta) {
            Ok(stamp) => DateTime::<Utc>::from(stamp),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping file without a creation time");
                continue;
            }
        };
        if let Some(period) = options.period {
            if !period.contains(created) {
                continue;
            }
        }

        found.push(ScannedFile {
            path: path.to_path_buf(),
            created,
            len: meta.len(),
        });
    }

    Ok(found)
}

/// Creation timestamp for a file, falling back to the modification time
/// on filesystems that do not record a birth time.
fn created_at(meta: &std::fs::Metadata) -> std::io::Result<SystemTime> {
    meta.created().or_else(|_| meta.modified())
}
