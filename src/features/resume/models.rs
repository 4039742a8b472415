use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// The downloadable resume document. Only the latest upload is kept.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    /// Generated file name on disk
    pub file_name: String,
    /// Name the file was uploaded under, used for the download filename
    pub original_name: String,
    pub path: PathBuf,
    pub content_type: String,
    pub size: u64,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
}
