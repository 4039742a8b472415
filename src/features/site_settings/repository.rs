use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::site_settings::models::SiteSettings;

/// Repository seam for the singleton settings row
#[async_trait]
pub trait SiteSettingsRepository: Send + Sync {
    async fn get(&self) -> Result<SiteSettings>;

    async fn set_youtube_url(&self, url: &str, updated_by: &str) -> Result<SiteSettings>;
}

/// In-memory settings row; defaults to empty until first update
#[derive(Default)]
pub struct InMemorySiteSettingsRepository {
    settings: RwLock<SiteSettings>,
}

impl InMemorySiteSettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SiteSettingsRepository for InMemorySiteSettingsRepository {
    async fn get(&self) -> Result<SiteSettings> {
        Ok(self.settings.read().await.clone())
    }

    async fn set_youtube_url(&self, url: &str, updated_by: &str) -> Result<SiteSettings> {
        let mut settings = self.settings.write().await;
        settings.youtube_url = url.to_string();
        settings.updated_by = Some(updated_by.to_string());
        settings.updated_at = Some(Utc::now());
        Ok(settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults_to_empty_url() {
        let repo = InMemorySiteSettingsRepository::new();
        let settings = repo.get().await.unwrap();
        assert!(settings.youtube_url.is_empty());
        assert!(settings.updated_by.is_none());
    }

    #[tokio::test]
    async fn test_set_youtube_url_records_updater() {
        let repo = InMemorySiteSettingsRepository::new();
        let updated = repo
            .set_youtube_url("https://youtu.be/abc123", "user-1")
            .await
            .unwrap();

        assert_eq!(updated.youtube_url, "https://youtu.be/abc123");
        assert_eq!(updated.updated_by.as_deref(), Some("user-1"));
        assert!(updated.updated_at.is_some());
    }
}
