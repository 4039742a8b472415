use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::videos::models::Video;

/// Fields accepted when recording an uploaded video
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub file_name: String,
    pub file_url: String,
    pub path: PathBuf,
    pub content_type: String,
    pub size: u64,
    pub uploaded_by: String,
}

/// Repository seam for video metadata (swappable backing; in-memory today)
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Record an uploaded video, initially inactive
    async fn create(&self, new: NewVideo) -> Result<Video>;

    /// All records, newest first
    async fn list(&self) -> Result<Vec<Video>>;

    async fn get(&self, id: Uuid) -> Result<Option<Video>>;

    /// Mark the given video active and deactivate every other record.
    ///
    /// Runs under a single write guard so the one-active invariant holds
    /// even when two activations race.
    async fn set_active(&self, id: Uuid) -> Result<Video>;

    /// The currently active video, if any
    async fn active(&self) -> Result<Option<Video>>;
}

/// Map-backed video metadata store
#[derive(Default)]
pub struct InMemoryVideoRepository {
    videos: RwLock<HashMap<Uuid, Video>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create(&self, new: NewVideo) -> Result<Video> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            file_name: new.file_name,
            file_url: new.file_url,
            path: new.path,
            content_type: new.content_type,
            size: new.size,
            is_active: false,
            uploaded_by: new.uploaded_by,
            created_at: now,
            updated_at: now,
        };

        let mut videos = self.videos.write().await;
        videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn list(&self) -> Result<Vec<Video>> {
        let videos = self.videos.read().await;
        let mut all: Vec<Video> = videos.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Video>> {
        let videos = self.videos.read().await;
        Ok(videos.get(&id).cloned())
    }

    async fn set_active(&self, id: Uuid) -> Result<Video> {
        let mut videos = self.videos.write().await;

        if !videos.contains_key(&id) {
            return Err(AppError::NotFound("Video not found".to_string()));
        }

        let now = Utc::now();
        for video in videos.values_mut() {
            let should_be_active = video.id == id;
            if video.is_active != should_be_active {
                video.is_active = should_be_active;
                video.updated_at = now;
            }
        }

        // Just set above; the key is known to exist
        Ok(videos.get(&id).cloned().unwrap())
    }

    async fn active(&self) -> Result<Option<Video>> {
        let videos = self.videos.read().await;
        Ok(videos.values().find(|v| v.is_active).cloned())
    }
}
