use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::site_settings::models::SiteSettings;

/// Request DTO for updating the introduction YouTube URL
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateYoutubeUrlDto {
    pub youtube_url: String,
}

/// Response DTO for site settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsResponseDto {
    pub youtube_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<SiteSettings> for SiteSettingsResponseDto {
    fn from(s: SiteSettings) -> Self {
        Self {
            youtube_url: s.youtube_url,
            updated_by: s.updated_by,
            updated_at: s.updated_at,
        }
    }
}
