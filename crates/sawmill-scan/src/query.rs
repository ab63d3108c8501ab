//! Read-only corpus queries: counting and searching log files.
//!
//! Every operation fans out one scan per root and skips roots that
//! cannot be used, failing only when no root was usable. That keeps
//! "all inputs bad" distinguishable from "ran fine, found nothing".

use std::path::PathBuf;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::Result;
use crate::scanner::{scan_root, ScanOptions, ScannedFile};
use crate::types::{
    DirectorySet, Outcome, Period, SizeRange, NO_LOGS_IN_DIRECTORIES, NO_LOGS_IN_PERIOD,
    NO_LOGS_IN_SIZE_RANGE,
};

/// Scans every root with the same options.
///
/// Unusable roots are logged and skipped; the first root error is
/// returned only when every root was unusable.
pub(crate) async fn scan_all(
    dirs: &DirectorySet,
    options: ScanOptions,
) -> Result<Vec<ScannedFile>> {
    let scans = dirs.roots().iter().map(|root| scan_root(root, options));
    let outcomes = join_all(scans).await;

    let mut files = Vec::new();
    let mut first_error = None;
    let mut usable = 0_usize;
    for (root, outcome) in dirs.roots().iter().zip(outcomes) {
        match outcome {
            Ok(mut scanned) => {
                usable += 1;
                files.append(&mut scanned);
            }
            Err(err) => {
                warn!(root = %root.display(), error = %err, "skipping unusable root");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) if usable == 0 => Err(err),
        _ => Ok(files),
    }
}

/// Counts log files created inside `period` across every root,
/// recursively.
///
/// # Errors
///
/// Fails when no root in `dirs` could be scanned.
pub async fn count_logs(dirs: &DirectorySet, period: Period) -> Result<Outcome<u64>> {
    let files = scan_all(dirs, ScanOptions::logs().within(period)).await?;
    debug!(count = files.len(), "counted logs in period");
    if files.is_empty() {
        return Ok(Outcome::empty(NO_LOGS_IN_PERIOD));
    }
    Ok(Outcome::Found(files.len() as u64))
}

/// Lists every log file under every root, recursively, sorted by path.
///
/// # Errors
///
/// Fails when no root in `dirs` could be scanned.
pub async fn search_logs(dirs: &DirectorySet) -> Result<Outcome<Vec<PathBuf>>> {
    let files = scan_all(dirs, ScanOptions::logs()).await?;
    Ok(to_paths(files, NO_LOGS_IN_DIRECTORIES))
}

/// Lists log files whose size in whole kilobytes falls inside `range`,
/// sorted by path.
///
/// # Errors
///
/// Fails when no root in `dirs` could be scanned.
pub async fn search_logs_by_size(
    dirs: &DirectorySet,
    range: SizeRange,
) -> Result<Outcome<Vec<PathBuf>>> {
    let files = scan_all(dirs, ScanOptions::logs().sized(range)).await?;
    Ok(to_paths(files, NO_LOGS_IN_SIZE_RANGE))
}

fn to_paths(files: Vec<ScannedFile>, reason: &str) -> Outcome<Vec<PathBuf>> {
    if files.is_empty() {
        return Outcome::empty(reason);
    }
    let mut paths: Vec<PathBuf> = files.into_iter().map(|file| file.path).collect();
    paths.sort();
    Outcome::Found(paths)
}
