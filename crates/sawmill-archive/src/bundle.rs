//! Zip bundling with archive-then-delete ordering.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ArchiveError, Result};

/// Writes `sources` into a new zip at `dest`, deleting each source file
/// right after its entry lands in the bundle.
///
/// The per-file delete is the crash-safety contract: a source is only
/// ever gone once its bytes are in the bundle, and an interruption loses
/// at most the file currently in flight. Deletes are never batched to
/// the end.
///
/// Entry names are the bare file names of the sources. Blocking; run it
/// on the blocking pool from async contexts.
///
/// # Errors
///
/// Fails when `dest` already exists, when an entry cannot be written, or
/// when a source cannot be read or removed.
pub fn write_bundle(dest: &Path, sources: &[PathBuf]) -> Result<()> {
    let file = File::create_new(dest).map_err(|source| ArchiveError::Io {
        path: dest.to_path_buf(),
        source,
    })?;
    let mut bundle = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(6));

    for source_path in sources {
        bundle
            .start_file(entry_name(source_path), options)
            .map_err(|source| ArchiveError::Bundle {
                path: dest.to_path_buf(),
                source,
            })?;
        let mut reader = File::open(source_path).map_err(|source| ArchiveError::Io {
            path: source_path.clone(),
            source,
        })?;
        io::copy(&mut reader, &mut bundle).map_err(|source| ArchiveError::Io {
            path: source_path.clone(),
            source,
        })?;
        fs::remove_file(source_path).map_err(|source| ArchiveError::Io {
            path: source_path.clone(),
            source,
        })?;
        debug!(path = %source_path.display(), "archived and removed source log");
    }

    bundle.finish().map_err(|source| ArchiveError::Bundle {
        path: dest.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn entry_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}
