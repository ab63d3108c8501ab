//! Archive creation and deletion across directory sets.
//!
//! One concurrent unit runs per directory. Creation selects logs from
//! the directory itself (not subtrees) so every zip entry keeps a bare,
//! collision-free file name; deletion scans recursively so stray
//! archives in subtrees are still found.

use std::path::PathBuf;

use tokio::task::JoinSet;
use tracing::{info, warn};

use sawmill_scan::{scan_root, DirectorySet, Outcome, Period, ScanOptions, NO_LOGS_IN_PERIOD};

use crate::bundle;
use crate::error::{ArchiveError, Result};

/// File name for the bundle covering `period`: `{start}-{end}.zip` with
/// `dd_mm_yyyy` dates.
#[must_use]
pub fn bundle_name(period: Period) -> String {
    format!(
        "{}-{}.zip",
        period.start().format("%d_%m_%Y"),
        period.end().format("%d_%m_%Y")
    )
}

/// Bundles the in-range top-level logs of every root into one dated zip
/// per root, deleting each source file as it lands in its bundle.
///
/// Roots with no matching logs contribute nothing, and an unusable root
/// is skipped as long as at least one root could be scanned. When
/// nothing was archived anywhere, the outcome is empty with the period
/// sentinel. Created archive paths come back sorted.
///
/// # Errors
///
/// Fails when every root is unusable (first root error wins) or when a
/// bundle cannot be written; every in-flight root is awaited before the
/// first failure is reported.
pub async fn archive_logs(dirs: &DirectorySet, period: Period) -> Result<Outcome<Vec<PathBuf>>> {
    let mut tasks = JoinSet::new();
    for root in dirs.roots() {
        let root = root.clone();
        tasks.spawn(async move { archive_root(root, period).await });
    }

    let mut archives = Vec::new();
    let mut usable = 0_usize;
    let mut root_error = None;
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        match joined? {
            Ok(Some(path)) => {
                usable += 1;
                archives.push(path);
            }
            Ok(None) => usable += 1,
            Err(ArchiveError::Scan(err)) => {
                warn!(error = %err, "skipping unusable root");
                if root_error.is_none() {
                    root_error = Some(err);
                }
            }
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
    if usable == 0 {
        if let Some(err) = root_error {
            return Err(ArchiveError::Scan(err));
        }
    }

    if archives.is_empty() {
        return Ok(Outcome::empty(NO_LOGS_IN_PERIOD));
    }
    archives.sort();
    info!(count = archives.len(), "created archives");
    Ok(Outcome::Found(archives))
}

async fn archive_root(root: PathBuf, period: Period) -> Result<Option<PathBuf>> {
    let files = scan_root(&root, ScanOptions::logs().top_level().within(period)).await?;
    if files.is_empty() {
        return Ok(None);
    }

    let dest = root.join(bundle_name(period));
    let mut sources: Vec<PathBuf> = files.into_iter().map(|file| file.path).collect();
    sources.sort();
    let count = sources.len();

    let written = tokio::task::spawn_blocking(move || {
        bundle::write_bundle(&dest, &sources).map(|()| dest)
    })
    .await??;
    info!(archive = %written.display(), files = count, "archived logs");
    Ok(Some(written))
}

/// Deletes every zip archive created inside `period` under every root,
/// scanning recursively, and returns the deleted file names sorted.
///
/// Unusable roots are skipped; deleting nothing anywhere is a failure,
/// deliberately distinct from [`archive_logs`]'s empty outcome.
///
/// # Errors
///
/// Returns [`ArchiveError::NoArchivesInRange`] when nothing was deleted
/// and [`ArchiveError::Io`] when a matched archive cannot be removed.
pub async fn delete_archives(dirs: &DirectorySet, period: Period) -> Result<Vec<String>> {
    let mut tasks = JoinSet::new();
    for root in dirs.roots() {
        let root = root.clone();
        tasks.spawn(async move { delete_root_archives(root, period).await });
    }

    let mut deleted = Vec::new();
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        match joined? {
            Ok(mut names) => deleted.append(&mut names),
            Err(ArchiveError::Scan(err)) => {
                warn!(error = %err, "skipping unusable root");
            }
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

    if deleted.is_empty() {
        return Err(ArchiveError::NoArchivesInRange);
    }
    deleted.sort();
    info!(count = deleted.len(), "deleted archives");
    Ok(deleted)
}

async fn delete_root_archives(root: PathBuf, period: Period) -> Result<Vec<String>> {
    let files = scan_root(&root, ScanOptions::archives().within(period)).await?;

    let mut names = Vec::with_capacity(files.len());
    for file in files {
        match tokio::fs::remove_file(&file.path).await {
            Ok(()) => names.push(
                file.path.file_name().map_or_else(
                    || file.path.to_string_lossy().into_owned(),
                    |name| name.to_string_lossy().into_owned(),
                ),
            ),
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
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};
    use test_case::test_case;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test_case(2024, 1, 1, 2024, 1, 31, "01_01_2024-31_01_2024.zip" ; "january window")]
    #[test_case(2024, 2, 9, 2024, 11, 3, "09_02_2024-03_11_2024.zip" ; "padded day and month")]
    #[test_case(2024, 6, 5, 2024, 6, 5, "05_06_2024-05_06_2024.zip" ; "single day")]
    fn bundle_name_formats_dates(
        sy: i32,
        sm: u32,
        sd: u32,
        ey: i32,
        em: u32,
        ed: u32,
        expected: &str,
    ) {
        let period = Period::new(date(sy, sm, sd), date(ey, em, ed)).expect("valid period");
        assert_eq!(bundle_name(period), expected);
    }

    #[test]
    fn bundle_name_for_today_window_is_stable() {
        let today = Utc::now().date_naive();
        let period =
            Period::new(today - Duration::days(1), today + Duration::days(1)).expect("valid period");
        let name = bundle_name(period);

        assert!(name.ends_with(".zip"));
        assert_eq!(name.matches('-').count(), 1);
    }
}
