//! Persistence side effects: directories, JSON artifacts, asset copies.
//!
//! Everything that touches the output tree goes through here, keeping the
//! aggregation/listing core pure. JSON is written pretty-printed so the
//! artifacts stay inspectable; writes always overwrite.
//!
//! The asset copy distinguishes "source directory doesn't exist" (a normal,
//! tolerated condition, most collections have no `images/`) from real
//! failures like permission errors, via [`CopyOutcome`]. Callers decide
//! what to tolerate instead of this layer swallowing errors wholesale.

use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a best-effort directory copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Source existed; `files` regular files were copied.
    Copied { files: usize },
    /// Source directory doesn't exist. Not an error.
    SourceMissing,
}

/// Create `path` and any missing parents. Idempotent.
pub fn ensure_dir(path: &Path) -> Result<(), PersistError> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Recursively delete `path`. A missing path is fine.
pub fn remove_dir(path: &Path) -> Result<(), PersistError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Serialize `value` as pretty JSON and write it to `path`, overwriting.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Copy the tree at `src` into `dst`.
///
/// A missing `src` reports [`CopyOutcome::SourceMissing`] without failing;
/// any other problem (unreadable file, full disk) is a real error.
pub fn copy_dir_best_effort(src: &Path, dst: &Path) -> Result<CopyOutcome, PersistError> {
    if !src.is_dir() {
        return Ok(CopyOutcome::SourceMissing);
    }
    let files = copy_dir_recursive(src, dst)?;
    Ok(CopyOutcome::Copied { files })
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, PersistError> {
    fs::create_dir_all(dst)?;
    let mut files = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            files += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            files += 1;
        }
    }
    Ok(files)
}
