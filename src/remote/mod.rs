//! Remote spreadsheet acquisition
//!
//! A [`RemoteStore`] turns a file identifier into a local, readable copy of
//! the shared spreadsheet, and writes a local file back under the same
//! identifier.
//!
//! Nothing coordinates concurrent writers: if two invocations persist the
//! same file, the last write wins.

mod drive;
pub mod file_io;
mod local;

pub use drive::DriveStore;
pub use local::LocalStore;

use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempPath;

use crate::config::{Settings, SplitPaths, StoreKind};
use crate::error::SplitResult;

/// Fetches and persists the shared spreadsheet
pub trait RemoteStore {
    /// Get a local copy of the current version of `file_id`
    fn fetch(&self, file_id: &str) -> SplitResult<LocalCopy>;

    /// Replace the remote `file_id` with the contents of `local`
    fn persist(&self, local: &Path, file_id: &str) -> SplitResult<()>;
}

/// A local copy of the shared spreadsheet
///
/// Downloaded copies are temporary and deleted on drop; files that already
/// lived on disk are left alone.
#[derive(Debug)]
pub enum LocalCopy {
    /// A file owned by the caller, kept after use
    Existing(PathBuf),
    /// A downloaded file, removed when dropped
    Temporary(TempPath),
}

impl LocalCopy {
    pub fn existing(path: PathBuf) -> Self {
        Self::Existing(path)
    }

    pub fn temporary(path: TempPath) -> Self {
        debug!("Holding downloaded copy {}", path.display());
        Self::Temporary(path)
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Existing(path) => path,
            Self::Temporary(path) => path,
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary(_))
    }
}

/// Build the store selected in the settings
pub fn open_store(settings: &Settings, paths: &SplitPaths) -> SplitResult<Box<dyn RemoteStore>> {
    match settings.remote.kind {
        StoreKind::Local => Ok(Box::new(LocalStore::new(std::env::current_dir()?))),
        StoreKind::Drive => Ok(Box::new(DriveStore::new(
            paths.downloads_dir(),
            settings.remote.access_token.clone(),
        )?)),
    }
}
