//! Google Drive store
//!
//! Downloads use the public export link, so the spreadsheet must be shared
//! by link. Uploads go through the Drive v3 media upload endpoint and need an
//! OAuth access token obtained elsewhere.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tempfile::Builder;

use super::{LocalCopy, RemoteStore};
use crate::error::{SplitError, SplitResult};

const DOWNLOAD_URL: &str = "https://drive.google.com/uc";
const UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Fetches and uploads spreadsheets stored on Google Drive
pub struct DriveStore {
    client: Client,
    downloads_dir: PathBuf,
    access_token: Option<String>,
}

impl DriveStore {
    pub fn new(downloads_dir: PathBuf, access_token: Option<String>) -> SplitResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("splitsheet/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SplitError::RemoteAccess(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            downloads_dir,
            access_token,
        })
    }

    fn download_url(file_id: &str) -> SplitResult<Url> {
        Url::parse_with_params(DOWNLOAD_URL, &[("export", "download"), ("id", file_id)])
            .map_err(|e| SplitError::RemoteAccess(format!("Invalid download URL: {}", e)))
    }

    fn upload_url(file_id: &str) -> SplitResult<Url> {
        let mut url = Url::parse(UPLOAD_URL)
            .map_err(|e| SplitError::RemoteAccess(format!("Invalid upload URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| SplitError::RemoteAccess("Invalid upload URL".into()))?
            .push(file_id);
        url.query_pairs_mut().append_pair("uploadType", "media");
        Ok(url)
    }

    /// File name prefix for downloads of `file_id`
    fn download_prefix(file_id: &str) -> String {
        let safe: String = file_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("{}-", safe)
    }

    /// Write a downloaded body to a fresh file owned by the returned copy
    ///
    /// Every download gets its own file, so overlapping invocations never
    /// read or delete each other's copy.
    fn save_download(&self, file_id: &str, body: &[u8]) -> SplitResult<LocalCopy> {
        fs::create_dir_all(&self.downloads_dir)?;

        let mut file = Builder::new()
            .prefix(&Self::download_prefix(file_id))
            .suffix(".xlsx")
            .tempfile_in(&self.downloads_dir)?;
        file.write_all(body)?;
        file.as_file().sync_all()?;

        debug!("Saved {} to {}", file_id, file.path().display());
        Ok(LocalCopy::temporary(file.into_temp_path()))
    }
}

/// Drive answers unshared or oversized files with an HTML page, not an error
fn looks_like_html(body: &[u8]) -> bool {
    let start = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(body.len());
    body[start..].starts_with(b"<")
}

impl RemoteStore for DriveStore {
    fn fetch(&self, file_id: &str) -> SplitResult<LocalCopy> {
        let url = Self::download_url(file_id)?;
        info!("Downloading spreadsheet {} from Drive", file_id);

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SplitError::RemoteAccess(format!("Download of {} failed: {}", file_id, e)))?;

        let body = response
            .bytes()
            .map_err(|e| SplitError::RemoteAccess(format!("Download of {} failed: {}", file_id, e)))?;

        if looks_like_html(&body) {
            return Err(SplitError::RemoteAccess(format!(
                "Drive returned a web page instead of file {}; check that it is shared by link",
                file_id
            )));
        }

        self.save_download(file_id, &body)
    }

    fn persist(&self, local: &Path, file_id: &str) -> SplitResult<()> {
        let token = self.access_token.as_deref().ok_or_else(|| {
            SplitError::RemoteAccess(
                "Uploading to Drive needs an access token (SPLITSHEET_ACCESS_TOKEN)".into(),
            )
        })?;

        let data = std::fs::read(local).map_err(|e| {
            SplitError::RemoteAccess(format!("Failed to read {}: {}", local.display(), e))
        })?;

        info!("Uploading {} to Drive file {}", local.display(), file_id);
        self.client
            .patch(Self::upload_url(file_id)?)
            .bearer_auth(token)
            .header(CONTENT_TYPE, XLSX_MIME)
            .body(data)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SplitError::RemoteAccess(format!("Upload of {} failed: {}", file_id, e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_urls() {
        assert_eq!(
            DriveStore::download_url("abc123").unwrap().as_str(),
            "https://drive.google.com/uc?export=download&id=abc123"
        );
        assert_eq!(
            DriveStore::upload_url("abc123").unwrap().as_str(),
            "https://www.googleapis.com/upload/drive/v3/files/abc123?uploadType=media"
        );
    }

    #[test]
    fn test_urls_escape_file_id() {
        assert_eq!(
            DriveStore::download_url("a&b=c d").unwrap().as_str(),
            "https://drive.google.com/uc?export=download&id=a%26b%3Dc+d"
        );
        assert_eq!(
            DriveStore::upload_url("a/b?c").unwrap().as_str(),
            "https://www.googleapis.com/upload/drive/v3/files/a%2Fb%3Fc?uploadType=media"
        );
    }

    #[test]
    fn test_download_prefix_is_sanitized() {
        assert_eq!(DriveStore::download_prefix("../etc/passwd"), "___etc_passwd-");
        assert_eq!(DriveStore::download_prefix("1AbC-d_9"), "1AbC-d_9-");
    }

    #[test]
    fn test_overlapping_downloads_keep_separate_copies() {
        let temp_dir = TempDir::new().unwrap();
        let downloads = temp_dir.path().join("downloads");
        let store = DriveStore::new(downloads.clone(), None).unwrap();

        let first = store.save_download("abc123", b"PK first").unwrap();
        let second = store.save_download("abc123", b"PK second").unwrap();

        assert_ne!(first.path(), second.path());
        assert!(first.path().starts_with(&downloads));
        assert_eq!(first.path().extension().unwrap(), "xlsx");

        drop(first);

        assert!(second.path().exists());
        assert_eq!(std::fs::read(second.path()).unwrap(), b"PK second");

        let second_path = second.path().to_path_buf();
        drop(second);
        assert!(!second_path.exists());
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html(b"  <!DOCTYPE html>"));
        assert!(!looks_like_html(b"PK\x03\x04"));
        assert!(!looks_like_html(b""));
    }

    #[test]
    fn test_persist_without_token() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("sheet.xlsx");
        std::fs::write(&local, b"PK").unwrap();
        let store = DriveStore::new(temp_dir.path().to_path_buf(), None).unwrap();

        let err = store.persist(&local, "abc123").unwrap_err();
        assert!(err.is_remote());
        assert!(err.to_string().contains("access token"));
    }
}
