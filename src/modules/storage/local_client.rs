//! Local-disk storage client
//!
//! Persists uploaded binaries under the configured uploads directory and
//! hands out relative URLs for them. Videos and resume documents live in
//! their own subdirectories.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::StorageConfig;
use crate::core::error::{AppError, Result};

/// Storage area for uploaded files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    /// Introduction videos (`uploads/videos/`)
    Videos,
    /// Resume documents (`uploads/documents/`)
    Documents,
}

impl StorageArea {
    fn dir_name(self) -> &'static str {
        match self {
            StorageArea::Videos => "videos",
            StorageArea::Documents => "documents",
        }
    }
}

/// A file persisted by the storage client
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Generated file name, unique within its area
    pub file_name: String,
    /// Relative URL the file is addressed by (e.g. `/uploads/videos/<uuid>.mp4`)
    pub file_url: String,
    /// Absolute path on disk
    pub path: PathBuf,
    pub size: u64,
}

/// Local-disk storage client
pub struct LocalStorageClient {
    root: PathBuf,
    public_base: String,
}

impl LocalStorageClient {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: PathBuf::from(&config.upload_dir),
            public_base: config.public_base.clone(),
        }
    }

    /// Ensure the upload directories exist, create if not
    pub async fn ensure_dirs_exist(&self) -> Result<()> {
        for area in [StorageArea::Videos, StorageArea::Documents] {
            let dir = self.root.join(area.dir_name());
            fs::create_dir_all(&dir).await?;
        }
        info!("Upload directories ready under {}", self.root.display());
        Ok(())
    }

    /// Persist file bytes under a generated name and return its metadata
    pub async fn save(
        &self,
        area: StorageArea,
        extension: &str,
        data: &[u8],
    ) -> Result<StoredFile> {
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.root.join(area.dir_name()).join(&file_name);

        fs::write(&path, data).await?;

        debug!("File written: {} ({} bytes)", path.display(), data.len());

        Ok(StoredFile {
            file_url: format!("{}/{}/{}", self.public_base, area.dir_name(), file_name),
            file_name,
            path,
            size: data.len() as u64,
        })
    }

    /// Absolute path for a file previously stored in the given area
    pub fn path_for(&self, area: StorageArea, file_name: &str) -> PathBuf {
        self.root.join(area.dir_name()).join(file_name)
    }

    /// Size in bytes of a stored file, or NotFound if it is gone from disk
    pub async fn file_size(&self, path: &Path) -> Result<u64> {
        match fs::metadata(path).await {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(
                "File not found on disk".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a stored file, ignoring files already gone from disk
    pub async fn delete(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => {
                debug!("File deleted: {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(dir: &Path) -> LocalStorageClient {
        LocalStorageClient::new(&StorageConfig {
            upload_dir: dir.to_string_lossy().to_string(),
            public_base: "/uploads".to_string(),
        })
    }

    #[tokio::test]
    async fn test_save_and_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let client = test_client(tmp.path());
        client.ensure_dirs_exist().await.unwrap();

        let stored = client
            .save(StorageArea::Videos, "mp4", b"fake video bytes")
            .await
            .unwrap();

        assert!(stored.file_url.starts_with("/uploads/videos/"));
        assert!(stored.file_name.ends_with(".mp4"));
        assert_eq!(stored.size, 16);
        assert_eq!(client.file_size(&stored.path).await.unwrap(), 16);
    }

    #[tokio::test]
    async fn test_file_size_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let client = test_client(tmp.path());
        client.ensure_dirs_exist().await.unwrap();

        let path = client.path_for(StorageArea::Videos, "missing.mp4");
        let err = client.file_size(&path).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let client = test_client(tmp.path());
        client.ensure_dirs_exist().await.unwrap();

        let stored = client
            .save(StorageArea::Documents, "pdf", b"resume")
            .await
            .unwrap();

        client.delete(&stored.path).await.unwrap();
        client.delete(&stored.path).await.unwrap();
    }
}
