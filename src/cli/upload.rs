//! Uploading an edited copy of the shared spreadsheet

use std::path::Path;

use crate::config::{Settings, SplitPaths};
use crate::error::{SplitError, SplitResult};
use crate::remote::open_store;

/// Replace the configured remote spreadsheet with a local file
pub fn handle_upload_command(settings: &Settings, paths: &SplitPaths, file: &Path) -> SplitResult<()> {
    if !file.is_file() {
        return Err(SplitError::Validation(format!(
            "File not found: {}",
            file.display()
        )));
    }

    if settings.remote.file_id.trim().is_empty() {
        return Err(SplitError::Config(
            "No spreadsheet configured. Set remote.file_id or SPLITSHEET_FILE_ID".into(),
        ));
    }

    let store = open_store(settings, paths)?;
    store.persist(file, &settings.remote.file_id)?;

    println!("Uploaded {} to {}", file.display(), settings.remote.file_id);
    Ok(())
}
