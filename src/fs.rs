//! File writing helpers
//!
//! The build writes its output through these so that readers of `dist/`
//! never observe a half-written document.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{StitchError, StitchResult};

/// Create a directory and its parents; no-op if it already exists.
pub fn ensure_dir(path: &Path) -> StitchResult<()> {
    fs::create_dir_all(path).map_err(|e| StitchError::destination_write(path, e))
}

/// Write content to a file atomically
///
/// Uses tempfile + rename in the destination directory, fully replacing any
/// previous contents.
pub fn atomic_write(path: &Path, content: &[u8]) -> StitchResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(parent).map_err(|e| StitchError::destination_write(path, e))?;
    tmp.write_all(content)
        .and_then(|_| tmp.flush())
        .map_err(|e| StitchError::destination_write(path, e))?;
    tmp.persist(path)
        .map_err(|e| StitchError::destination_write(path, e.error))?;
    Ok(())
}

/// Copy a file into `dest_dir`, keeping its file name.
///
/// Returns `Ok(false)` when `src` does not exist.
pub fn copy_if_exists(src: &Path, dest_dir: &Path) -> StitchResult<bool> {
    if !src.is_file() {
        return Ok(false);
    }
    let Some(name) = src.file_name() else {
        return Ok(false);
    };
    let dest = dest_dir.join(name);
    fs::copy(src, &dest).map_err(|e| StitchError::destination_write(&dest, e))?;
    Ok(true)
}
