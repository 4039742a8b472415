use chrono::{DateTime, Utc};

/// Singleton settings row for the public site
#[derive(Debug, Clone, Default)]
pub struct SiteSettings {
    pub youtube_url: String,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
