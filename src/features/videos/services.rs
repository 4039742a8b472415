use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::videos::dtos::VideoResponseDto;
use crate::features::videos::models::Video;
use crate::features::videos::repository::{NewVideo, VideoRepository};
use crate::modules::storage::{LocalStorageClient, StorageArea};
use crate::shared::constants::MAX_VIDEO_SIZE;

/// Accepted video MIME types and their file extensions
const ALLOWED_VIDEO_TYPES: &[(&str, &str)] = &[
    ("video/mp4", "mp4"),
    ("video/quicktime", "mov"),
    ("video/avi", "avi"),
];

fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_VIDEO_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// Introduction video upload, activation and streaming
pub struct VideoService {
    videos: Arc<dyn VideoRepository>,
    storage: Arc<LocalStorageClient>,
}

impl VideoService {
    pub fn new(videos: Arc<dyn VideoRepository>, storage: Arc<LocalStorageClient>) -> Self {
        Self { videos, storage }
    }

    /// Persist an uploaded video and make it the active one
    pub async fn upload(
        &self,
        content_type: &str,
        data: &[u8],
        uploaded_by: &str,
    ) -> Result<VideoResponseDto> {
        let Some(extension) = extension_for(content_type) else {
            return Err(AppError::Validation(format!(
                "Unsupported video type '{}'. Allowed: video/mp4, video/quicktime, video/avi",
                content_type
            )));
        };

        if data.is_empty() {
            return Err(AppError::Validation("Uploaded video is empty".to_string()));
        }
        if data.len() > MAX_VIDEO_SIZE {
            return Err(AppError::Validation(
                "Video exceeds the 100 MB size limit".to_string(),
            ));
        }

        let stored = self.storage.save(StorageArea::Videos, extension, data).await?;

        let video = self
            .videos
            .create(NewVideo {
                file_name: stored.file_name,
                file_url: stored.file_url,
                path: stored.path,
                content_type: content_type.to_string(),
                size: stored.size,
                uploaded_by: uploaded_by.to_string(),
            })
            .await?;

        // Exclusive activation; deactivates every earlier upload
        let video = self.videos.set_active(video.id).await?;

        info!(
            video_id = %video.id,
            size = video.size,
            "Video uploaded and activated"
        );

        Ok(video.into())
    }

    /// Make an existing video the active one
    pub async fn activate(&self, id: Uuid) -> Result<VideoResponseDto> {
        let video = self.videos.set_active(id).await?;
        info!(video_id = %video.id, "Video activated");
        Ok(video.into())
    }

    /// All uploaded videos, newest first
    pub async fn list(&self) -> Result<Vec<VideoResponseDto>> {
        let videos = self.videos.list().await?;
        Ok(videos.into_iter().map(Into::into).collect())
    }

    /// The active video together with its current on-disk size.
    ///
    /// NotFound when nothing is active or the file is gone from disk.
    pub async fn active_video(&self) -> Result<(Video, u64)> {
        let video = self
            .videos
            .active()
            .await?
            .ok_or_else(|| AppError::NotFound("No active introduction video".to_string()))?;

        let size = self.storage.file_size(&video.path).await?;
        Ok((video, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StorageConfig;
    use crate::features::videos::repository::InMemoryVideoRepository;

    async fn test_service(dir: &std::path::Path) -> VideoService {
        let storage = Arc::new(LocalStorageClient::new(&StorageConfig {
            upload_dir: dir.to_string_lossy().to_string(),
            public_base: "/uploads".to_string(),
        }));
        storage.ensure_dirs_exist().await.unwrap();
        VideoService::new(Arc::new(InMemoryVideoRepository::new()), storage)
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type() {
        let tmp = tempfile::tempdir().unwrap();
        let service = test_service(tmp.path()).await;

        let err = service
            .upload("image/png", b"not a video", "user-1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_upload_activates_latest() {
        let tmp = tempfile::tempdir().unwrap();
        let service = test_service(tmp.path()).await;

        let first = service.upload("video/mp4", b"aaaa", "user-1").await.unwrap();
        assert!(first.is_active);

        let second = service
            .upload("video/quicktime", b"bbbb", "user-1")
            .await
            .unwrap();
        assert!(second.is_active);

        let all = service.list().await.unwrap();
        let active: Vec<_> = all.iter().filter(|v| v.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second.id);
    }

    #[tokio::test]
    async fn test_active_video_without_uploads_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let service = test_service(tmp.path()).await;

        let err = service.active_video().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_active_video_with_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let service = test_service(tmp.path()).await;

        let uploaded = service.upload("video/mp4", b"abcd", "user-1").await.unwrap();
        let path = tmp
            .path()
            .join("videos")
            .join(&uploaded.file_name);
        tokio::fs::remove_file(path).await.unwrap();

        let err = service.active_video().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
