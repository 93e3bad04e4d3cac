//! Filesystem-backed store
//!
//! Useful when the spreadsheet lives in a synced folder. The file identifier
//! is a path, resolved against the store's root when relative.

use std::path::{Path, PathBuf};

use log::info;

use super::file_io::copy_atomic;
use super::{LocalCopy, RemoteStore};
use crate::error::{SplitError, SplitResult};

/// Reads and writes spreadsheets on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, file_id: &str) -> PathBuf {
        self.root.join(file_id)
    }
}

impl RemoteStore for LocalStore {
    fn fetch(&self, file_id: &str) -> SplitResult<LocalCopy> {
        let path = self.resolve(file_id);
        if !path.is_file() {
            return Err(SplitError::RemoteAccess(format!(
                "File not found: {}",
                path.display()
            )));
        }

        info!("Using local spreadsheet {}", path.display());
        Ok(LocalCopy::existing(path))
    }

    fn persist(&self, local: &Path, file_id: &str) -> SplitResult<()> {
        let dest = self.resolve(file_id);
        if local == dest {
            return Ok(());
        }

        copy_atomic(local, &dest).map_err(|e| SplitError::RemoteAccess(e.to_string()))?;
        info!("Saved {} to {}", local.display(), dest.display());
        Ok(())
    }
}
