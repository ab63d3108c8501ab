//! Per-file error-signature aggregation.
//!
//! Each matched log file is read by its own task; the per-file tallies
//! land in a shared concurrent map keyed by path, each key written
//! exactly once by its owning task. Callers pick the statistic with
//! [`ErrorMetric`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::Result;
use crate::query::scan_all;
use crate::scanner::ScanOptions;
use crate::signature;
use crate::types::{DirectorySet, Outcome, NO_LOGS_IN_DIRECTORIES};

/// Which per-file statistic an aggregation run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMetric {
    /// Number of distinct signatures in the file.
    Unique,
    /// Number of signatures that occur at least twice in the file.
    Duplicated,
}

impl ErrorMetric {
    /// Reduces one file's signature tallies to this metric.
    ///
    /// A signature seen five times counts once toward
    /// [`ErrorMetric::Duplicated`], not five times.
    #[must_use]
    pub fn reduce(&self, tallies: &HashMap<String, usize>) -> usize {
        match self {
            Self::Unique => tallies.len(),
            Self::Duplicated => tallies.values().filter(|&&count| count > 1).count(),
        }
    }
}

/// Tallies signature occurrences over the lines of one file's content.
///
/// Lines that do not match the timestamp shape carry no signature and
/// are ignored.
#[must_use]
pub fn tally_lines(content: &str) -> HashMap<String, usize> {
    let mut tallies = HashMap::new();
    for line in content.lines() {
        if let Some(sig) = signature::from_line(line) {
            *tallies.entry(sig).or_insert(0) += 1;
        }
    }
    tallies
}

/// Counts distinct error signatures per log file across every root,
/// recursively.
///
/// # Errors
///
/// Fails when no root in `dirs` could be scanned or a file task dies.
pub async fn count_unique_errors(
    dirs: &DirectorySet,
) -> Result<Outcome<HashMap<PathBuf, usize>>> {
    aggregate(dirs, ErrorMetric::Unique).await
}

/// Counts recurring error signatures per log file across every root,
/// recursively.
///
/// # Errors
///
/// Fails when no root in `dirs` could be scanned or a file task dies.
pub async fn count_duplicate_errors(
    dirs: &DirectorySet,
) -> Result<Outcome<HashMap<PathBuf, usize>>> {
    aggregate(dirs, ErrorMetric::Duplicated).await
}

async fn aggregate(
    dirs: &DirectorySet,
    metric: ErrorMetric,
) -> Result<Outcome<HashMap<PathBuf, usize>>> {
    let files = scan_all(dirs, ScanOptions::logs()).await?;
    if files.is_empty() {
        return Ok(Outcome::empty(NO_LOGS_IN_DIRECTORIES));
    }

    let counts: Arc<DashMap<PathBuf, usize>> = Arc::new(DashMap::with_capacity(files.len()));
    let mut tasks = JoinSet::new();
    for file in files {
        let counts = Arc::clone(&counts);
        tasks.spawn(async move {
            match tokio::fs::read(&file.path).await {
                Ok(bytes) => {
                    let content = String::from_utf8_lossy(&bytes);
                    let count = metric.reduce(&tally_lines(&content));
                    counts.insert(file.path, count);
                }
                Err(err) => {
                    warn!(path = %file.path.display(), error = %err, "skipping unreadable log file");
                }
            }
        });
    }
    while let Some(joined) = tasks.join_next().await {
        joined?;
    }

    // Every file skipped over a read failure leaves nothing aggregated.
    if counts.is_empty() {
        return Ok(Outcome::empty(NO_LOGS_IN_DIRECTORIES));
    }

    let mut results = HashMap::with_capacity(counts.len());
    for entry in counts.iter() {
        results.insert(entry.key().clone(), *entry.value());
    }
    debug!(files = results.len(), ?metric, "aggregated error signatures");
    Ok(Outcome::Found(results))
}
