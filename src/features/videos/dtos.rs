use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::videos::models::Video;

/// Response DTO for a video record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponseDto {
    pub id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub content_type: String,
    pub size: u64,
    pub is_active: bool,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoResponseDto {
    fn from(v: Video) -> Self {
        Self {
            id: v.id,
            file_name: v.file_name,
            file_url: v.file_url,
            content_type: v.content_type,
            size: v.size,
            is_active: v.is_active,
            uploaded_by: v.uploaded_by,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

/// Multipart form schema for video upload (OpenAPI only)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadVideoForm {
    /// Video binary (`video/mp4`, `video/quicktime` or `video/avi`)
    #[schema(value_type = String, format = Binary)]
    pub video: String,
}
