//! File I/O utilities with atomic writes
//!
//! Downloads and uploads replace whole files. Writing to a temp file and
//! renaming means a reader never sees a half-written spreadsheet.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::SplitError;

/// Write bytes to a file atomically (write to temp, then rename)
///
/// Each call writes through its own uniquely named temp file, so concurrent
/// writers never share a partial file.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), SplitError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Ensure parent directory exists
    fs::create_dir_all(parent).map_err(|e| {
        SplitError::Io(format!(
            "Failed to create directory {}: {}",
            parent.display(),
            e
        ))
    })?;

    // Temp file in the same directory keeps the rename atomic
    let mut temp = Builder::new()
        .suffix(".part")
        .tempfile_in(parent)
        .map_err(|e| SplitError::Io(format!("Failed to create temp file: {}", e)))?;

    temp.write_all(data)
        .map_err(|e| SplitError::Io(format!("Failed to write data: {}", e)))?;

    // Sync to disk before rename
    temp.as_file()
        .sync_all()
        .map_err(|e| SplitError::Io(format!("Failed to sync data: {}", e)))?;

    temp.persist(path)
        .map_err(|e| SplitError::Io(format!("Failed to rename temp file: {}", e.error)))?;

    Ok(())
}

/// Copy a file atomically to `dest`
pub fn copy_atomic<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<(), SplitError> {
    let src = src.as_ref();
    let data = fs::read(src)
        .map_err(|e| SplitError::Io(format!("Failed to read {}: {}", src.display(), e)))?;
    write_bytes_atomic(dest, &data)
}
