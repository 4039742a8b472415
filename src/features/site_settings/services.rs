use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::site_settings::dtos::SiteSettingsResponseDto;
use crate::features::site_settings::repository::SiteSettingsRepository;
use crate::shared::validation::YOUTUBE_URL_REGEX;

/// Service for the singleton site settings row
pub struct SiteSettingsService {
    settings: Arc<dyn SiteSettingsRepository>,
}

impl SiteSettingsService {
    pub fn new(settings: Arc<dyn SiteSettingsRepository>) -> Self {
        Self { settings }
    }

    pub async fn get(&self) -> Result<SiteSettingsResponseDto> {
        Ok(self.settings.get().await?.into())
    }

    /// Validate and store the introduction YouTube URL
    pub async fn update_youtube_url(
        &self,
        url: &str,
        updated_by: &str,
    ) -> Result<SiteSettingsResponseDto> {
        let url = url.trim();
        if !YOUTUBE_URL_REGEX.is_match(url) {
            return Err(AppError::Validation(
                "youtubeUrl must be a valid YouTube URL".to_string(),
            ));
        }

        let updated = self.settings.set_youtube_url(url, updated_by).await?;
        tracing::info!("YouTube URL updated by {}", updated_by);
        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::site_settings::repository::InMemorySiteSettingsRepository;

    fn test_service() -> SiteSettingsService {
        SiteSettingsService::new(Arc::new(InMemorySiteSettingsRepository::new()))
    }

    #[tokio::test]
    async fn test_rejects_non_youtube_url() {
        let service = test_service();
        let err = service
            .update_youtube_url("not-a-url", "user-1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_accepts_and_returns_youtube_url() {
        let service = test_service();
        let updated = service
            .update_youtube_url("https://www.youtube.com/watch?v=abc", "user-1")
            .await
            .unwrap();
        assert_eq!(updated.youtube_url, "https://www.youtube.com/watch?v=abc");

        let fetched = service.get().await.unwrap();
        assert_eq!(fetched.youtube_url, "https://www.youtube.com/watch?v=abc");
    }
}
