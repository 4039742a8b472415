use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::resume::dtos::ResumeResponseDto;
use crate::features::resume::models::ResumeDocument;
use crate::features::resume::repository::ResumeRepository;
use crate::modules::storage::{LocalStorageClient, StorageArea};
use crate::shared::constants::MAX_DOCUMENT_SIZE;

/// Accepted resume MIME types and their file extensions
const ALLOWED_DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("application/pdf", "pdf"),
    ("application/msword", "doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "docx",
    ),
];

fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_DOCUMENT_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// Resume upload and download
pub struct ResumeService {
    resumes: Arc<dyn ResumeRepository>,
    storage: Arc<LocalStorageClient>,
}

impl ResumeService {
    pub fn new(resumes: Arc<dyn ResumeRepository>, storage: Arc<LocalStorageClient>) -> Self {
        Self { resumes, storage }
    }

    /// Store a new resume, replacing and deleting the previous one
    pub async fn upload(
        &self,
        original_name: &str,
        content_type: &str,
        data: &[u8],
        uploaded_by: &str,
    ) -> Result<ResumeResponseDto> {
        let Some(extension) = extension_for(content_type) else {
            return Err(AppError::Validation(format!(
                "Unsupported document type '{}'. Allowed: PDF and Word documents",
                content_type
            )));
        };

        if data.is_empty() {
            return Err(AppError::Validation("Uploaded resume is empty".to_string()));
        }
        if data.len() > MAX_DOCUMENT_SIZE {
            return Err(AppError::Validation(
                "Resume exceeds the 10 MB size limit".to_string(),
            ));
        }

        let stored = self
            .storage
            .save(StorageArea::Documents, extension, data)
            .await?;

        let document = ResumeDocument {
            file_name: stored.file_name,
            original_name: original_name.to_string(),
            path: stored.path,
            content_type: content_type.to_string(),
            size: stored.size,
            uploaded_by: uploaded_by.to_string(),
            uploaded_at: Utc::now(),
        };

        let previous = self.resumes.replace(document.clone()).await?;
        if let Some(previous) = previous {
            self.storage.delete(&previous.path).await?;
        }

        info!(size = document.size, "Resume uploaded");
        Ok(document.into())
    }

    /// The stored resume, or NotFound when none has been uploaded
    pub async fn current(&self) -> Result<ResumeDocument> {
        self.resumes
            .get()
            .await?
            .ok_or_else(|| AppError::NotFound("No resume has been uploaded".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StorageConfig;
    use crate::features::resume::repository::InMemoryResumeRepository;

    async fn test_service(dir: &std::path::Path) -> ResumeService {
        let storage = Arc::new(LocalStorageClient::new(&StorageConfig {
            upload_dir: dir.to_string_lossy().to_string(),
            public_base: "/uploads".to_string(),
        }));
        storage.ensure_dirs_exist().await.unwrap();
        ResumeService::new(Arc::new(InMemoryResumeRepository::new()), storage)
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type() {
        let tmp = tempfile::tempdir().unwrap();
        let service = test_service(tmp.path()).await;

        let err = service
            .upload("resume.zip", "application/zip", b"zip", "user-1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_upload_replaces_and_deletes_previous_file() {
        let tmp = tempfile::tempdir().unwrap();
        let service = test_service(tmp.path()).await;

        service
            .upload("old.pdf", "application/pdf", b"old bytes", "user-1")
            .await
            .unwrap();
        let old_path = service.current().await.unwrap().path;

        service
            .upload("new.pdf", "application/pdf", b"new bytes", "user-1")
            .await
            .unwrap();

        assert!(!old_path.exists());
        let current = service.current().await.unwrap();
        assert_eq!(current.original_name, "new.pdf");
        assert!(current.path.exists());
    }

    #[tokio::test]
    async fn test_current_without_upload_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let service = test_service(tmp.path()).await;

        let err = service.current().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
