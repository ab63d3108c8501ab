//! Bulk log deletion for a date range.

use std::path::PathBuf;

use tokio::task::JoinSet;
use tracing::info;

use sawmill_scan::{scan_root, DirectorySet, Outcome, Period, ScanOptions, NO_LOGS_IN_PERIOD};

use crate::error::{ArchiveError, Result};

/// Deletes every log created inside `period` under every root,
/// including logs in subdirectories, and reports how many went away.
///
/// Deletion is destructive, so unlike the read-side operations every
/// root is validated before anything is removed: one missing root fails
/// the whole call with nothing deleted. A run that matches no files is
/// an empty outcome with the period sentinel, not an error.
///
/// # Errors
///
/// Returns [`ArchiveError::DirectoryNotFound`] when a root is absent or
/// not a directory, and [`ArchiveError::Io`] when a matched log cannot
/// be removed.
pub async fn delete_logs(dirs: &DirectorySet, period: Period) -> Result<Outcome<u64>> {
    for root in dirs.roots() {
        let meta = match tokio::fs::metadata(root).await {
            Ok(meta) => meta,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(ArchiveError::DirectoryNotFound { path: root.clone() });
            }
            Err(source) => {
                return Err(ArchiveError::Io {
                    path: root.clone(),
                    source,
                });
            }
        };
        if !meta.is_dir() {
            return Err(ArchiveError::DirectoryNotFound { path: root.clone() });
        }
    }

    let mut tasks = JoinSet::new();
    for root in dirs.roots() {
        let root = root.clone();
        tasks.spawn(async move { purge_root(root, period).await });
    }

    let mut total = 0_u64;
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        match joined? {
            Ok(count) => total += count,
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }
    if let Some(err) = first_error {
        return Err(err);
    }

    if total == 0 {
        return Ok(Outcome::empty(NO_LOGS_IN_PERIOD));
    }
    info!(count = total, "deleted logs");
    Ok(Outcome::Found(total))
}

async fn purge_root(root: PathBuf, period: Period) -> Result<u64> {
    let files = scan_root(&root, ScanOptions::logs().within(period)).await?;

    let mut count = 0_u64;
    for file in files {
        match tokio::fs::remove_file(&file.path).await {
            Ok(()) => count += 1,
            // An overlapping root's task can win the race for the same file.
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(ArchiveError::Io {
                    path: file.path.clone(),
                    source,
                });
            }
        }
    }
    Ok(count)
}
