use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::resume::models::ResumeDocument;

/// Response DTO describing the stored resume
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponseDto {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<ResumeDocument> for ResumeResponseDto {
    fn from(d: ResumeDocument) -> Self {
        Self {
            file_name: d.original_name,
            content_type: d.content_type,
            size: d.size,
            uploaded_at: d.uploaded_at,
        }
    }
}

/// Multipart form schema for resume upload (OpenAPI only)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadResumeForm {
    /// Resume binary (PDF or Word document)
    #[schema(value_type = String, format = Binary)]
    pub resume: String,
}
