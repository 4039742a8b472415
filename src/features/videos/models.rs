use chrono::{DateTime, Utc};
use std::path::PathBuf;
use uuid::Uuid;

/// Introduction video record. The binary lives on disk under the uploads
/// directory; at most one record is active at any time.
#[derive(Debug, Clone)]
pub struct Video {
    pub id: Uuid,
    /// Generated file name on disk
    pub file_name: String,
    /// Relative URL under the uploads directory
    pub file_url: String,
    /// Absolute path of the binary on disk
    pub path: PathBuf,
    pub content_type: String,
    pub size: u64,
    pub is_active: bool,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
